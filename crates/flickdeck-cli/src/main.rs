use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::Context;
use commands::AppContext;

mod commands;
mod logging;
mod output;

#[derive(Parser)]
#[command(name = "flickdeck")]
#[command(about = "Flickdeck - browse the movie catalog and keep your list")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home screen: hero banner and every category row
    Home,
    /// Browse movies, optionally filtered to a single genre
    Movies {
        /// Genre name or id to filter by
        #[arg(long)]
        genre: Option<String>,
    },
    /// Show this week's trending movies
    Trending,
    /// Search the catalog by title
    Search {
        /// Free-text title query
        query: String,
    },
    /// Show a movie's details and its watchlist membership
    Details {
        /// Catalog movie id
        id: u64,
    },
    /// Open the simulated player for a movie
    Play {
        /// Catalog movie id
        id: u64,
    },
    /// Show or change your watchlist
    Watchlist {
        #[command(subcommand)]
        cmd: Option<WatchlistCommands>,
    },
    /// Show the signed-in user's profile
    Profile,
    /// Record a signed-in session for later invocations
    Login {
        /// User id reported by the auth provider
        user_id: String,

        /// Access token for row-level store access
        #[arg(long)]
        token: Option<String>,
    },
    /// Clear the stored session
    Logout,
    /// Show configuration
    Config {
        /// Show full configuration including masked secrets
        #[arg(long, action = ArgAction::SetTrue)]
        full: bool,
    },
}

#[derive(Subcommand)]
enum WatchlistCommands {
    /// List saved movies, newest first
    List,
    /// Add or remove a movie from your list
    Toggle {
        /// Catalog movie id
        id: u64,
    },
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let paths = flickdeck_config::PathManager::default();
    match paths.ensure_directories() {
        Ok(()) => logging::init_logging_with_file(cli.verbose, cli.quiet, Some(paths.log_file())),
        // Unwritable app directories fall back to stderr logging
        Err(_) => logging::init_logging(cli.verbose, cli.quiet),
    }
    .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);
    let ctx = AppContext::load().wrap_err("Failed to load configuration")?;

    match cli.command {
        Commands::Home => commands::browse::run_home(&ctx, &output).await?,
        Commands::Movies { genre } => {
            commands::browse::run_movies(&ctx, &output, genre.as_deref()).await?
        }
        Commands::Trending => commands::browse::run_trending(&ctx, &output).await?,
        Commands::Search { query } => commands::browse::run_search(&ctx, &output, &query).await?,
        Commands::Details { id } => commands::browse::run_details(&ctx, &output, id).await?,
        Commands::Play { id } => commands::browse::run_play(&ctx, &output, id).await?,
        Commands::Watchlist { cmd } => match cmd.unwrap_or(WatchlistCommands::List) {
            WatchlistCommands::List => commands::watchlist::run_list(&ctx, &output).await?,
            WatchlistCommands::Toggle { id } => {
                commands::watchlist::run_toggle(&ctx, &output, id).await?
            }
        },
        Commands::Profile => commands::account::run_profile(&ctx, &output).await?,
        Commands::Login { user_id, token } => {
            commands::account::run_login(&ctx, &output, &user_id, token.as_deref()).await?
        }
        Commands::Logout => commands::account::run_logout(&ctx, &output).await?,
        Commands::Config { full } => commands::config::run_show(&ctx, &output, full)?,
    }

    Ok(())
}
