use color_eyre::Result;
use flickdeck_catalog::{Catalog, CatalogClient};
use flickdeck_core::{load_detail, load_home, load_movies, search, DetailScreen, PlayerScreen, Route};
use serde_json::json;

use crate::commands::AppContext;
use crate::output::{Output, OutputFormat};

/// Render the home screen: hero banner line plus every category row.
pub async fn run_home(ctx: &AppContext, output: &Output) -> Result<()> {
    let home = load_home(&ctx.catalog).await;

    if let OutputFormat::Human = output.format() {
        if let Some(hero) = home.hero() {
            let backdrop = ctx.catalog.images().backdrop(hero.backdrop_path.as_deref());
            output.info(format!("Featured: {} ({})", hero.title, backdrop));
        }
        for row in &home.rows {
            output.heading(row.title);
            output.movies(&row.movies);
        }
    } else {
        let rows: Vec<serde_json::Value> = home
            .rows
            .iter()
            .map(|row| json!({ "title": row.title, "movies": row.movies }))
            .collect();
        output.json(&json!({ "rows": rows }));
    }

    Ok(())
}

/// Browse the catalog, optionally narrowed to one genre.
pub async fn run_movies(ctx: &AppContext, output: &Output, genre: Option<&str>) -> Result<()> {
    let selected = match genre {
        None => None,
        Some(wanted) => match resolve_genre(&ctx.catalog, wanted).await {
            Some(id) => Some(id),
            None => {
                output.error(format!("Unknown genre '{}'", wanted));
                return Ok(());
            }
        },
    };

    let screen = load_movies(&ctx.catalog, selected).await;

    if let OutputFormat::Human = output.format() {
        match screen.selected_name() {
            Some(name) => output.heading(format!("{} Movies", name)),
            None => output.heading("Movies"),
        }
        output.movies(&screen.movies);
    } else {
        output.json(&json!({
            "genres": screen.genres,
            "selected": screen.selected,
            "movies": screen.movies,
        }));
    }
    Ok(())
}

/// Accept a numeric genre id or a case-insensitive genre name.
async fn resolve_genre(catalog: &CatalogClient, wanted: &str) -> Option<u64> {
    if let Ok(id) = wanted.parse::<u64>() {
        return Some(id);
    }
    let vocabulary = catalog.genres().await.unwrap_or_default();
    vocabulary
        .iter()
        .find(|g| g.name.eq_ignore_ascii_case(wanted))
        .map(|g| g.id)
}

pub async fn run_trending(ctx: &AppContext, output: &Output) -> Result<()> {
    match ctx.catalog.trending().await {
        Ok(movies) => output.movies(&movies),
        Err(e) => {
            // Degrade to an empty listing, same as the home screen does
            tracing::warn!(error = %e, "Trending fetch failed");
            output.warn("Catalog unavailable, no trending data");
            output.movies(&[]);
        }
    }
    Ok(())
}

pub async fn run_search(ctx: &AppContext, output: &Output, query: &str) -> Result<()> {
    let movies = search(&ctx.catalog, query).await;
    output.movies(&movies);
    Ok(())
}

pub async fn run_details(ctx: &AppContext, output: &Output, movie_id: u64) -> Result<()> {
    match load_detail(&ctx.catalog, &ctx.store, &ctx.session, movie_id).await {
        DetailScreen::Found { movie, watchlist } => {
            if let OutputFormat::Human = output.format() {
                output.heading(&movie.title);
                if let Some(year) = movie.release_year() {
                    output.info(format!("Released: {}", year));
                }
                if let Some(runtime) = movie.runtime {
                    output.info(format!("Runtime: {} min", runtime));
                }
                output.info(format!("Rating: {:.1}", movie.vote_average));
                if let Some(genres) = &movie.genres {
                    let names: Vec<&str> = genres.iter().map(|g| g.name.as_str()).collect();
                    output.info(format!("Genres: {}", names.join(", ")));
                }
                output.info(format!(
                    "In My List: {}",
                    if watchlist.is_in_list() { "yes" } else { "no" }
                ));
                output.info("");
                output.info(&movie.overview);
            } else {
                output.json(&json!({
                    "movie": movie,
                    "in_watchlist": watchlist.is_in_list()
                }));
            }
        }
        DetailScreen::NotFound => output.error(format!("Movie {} not found", movie_id)),
        DetailScreen::Unavailable => output.error("Catalog unavailable, try again later"),
    }
    Ok(())
}

/// Simulated player: prints the trailer embed URL or the static fallback.
pub async fn run_play(ctx: &AppContext, output: &Output, movie_id: u64) -> Result<()> {
    match load_detail(&ctx.catalog, &ctx.store, &ctx.session, movie_id).await {
        DetailScreen::Found { movie, .. } => {
            let screen = PlayerScreen::for_movie(&movie);
            if let OutputFormat::Human = output.format() {
                output.heading(format!("Now playing: {}", screen.title));
                match &screen.embed_url {
                    Some(url) => output.info(format!("Trailer: {}", url)),
                    None => output.warn("No trailer available, showing static fallback"),
                }
                output.info(format!("Route: {}", Route::Player(movie_id).path()));
            } else {
                output.json(&json!({
                    "title": screen.title,
                    "embed_url": screen.embed_url,
                    "route": Route::Player(movie_id).path()
                }));
            }
        }
        DetailScreen::NotFound => output.error(format!("Movie {} not found", movie_id)),
        DetailScreen::Unavailable => output.error("Catalog unavailable, try again later"),
    }
    Ok(())
}
