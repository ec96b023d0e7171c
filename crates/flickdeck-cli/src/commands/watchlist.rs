use color_eyre::Result;
use flickdeck_catalog::Catalog;
use flickdeck_core::{
    load_watchlist, Notifier, Route, ToggleOutcome, WatchlistScreen, WatchlistSync,
};
use flickdeck_models::{Notification, NotificationKind};

use crate::commands::AppContext;
use crate::output::Output;

/// Routes workflow notifications to the terminal.
struct OutputNotifier<'a> {
    output: &'a Output,
}

impl Notifier for OutputNotifier<'_> {
    fn notify(&self, notification: Notification) {
        match notification.kind {
            NotificationKind::Success => self.output.success(&notification.message),
            NotificationKind::Failure => self.output.error(&notification.message),
        }
    }
}

pub async fn run_list(ctx: &AppContext, output: &Output) -> Result<()> {
    match load_watchlist(&ctx.store, &ctx.session).await {
        WatchlistScreen::SignInRequired => {
            output.warn(format!(
                "Sign in to see your list: flickdeck login <user-id>  ({})",
                Route::SignIn.path()
            ));
        }
        WatchlistScreen::Loaded(movies) => {
            if movies.is_empty() {
                output.info("Your watchlist is empty");
            } else {
                output.movies(&movies);
            }
        }
    }
    Ok(())
}

pub async fn run_toggle(ctx: &AppContext, output: &Output, movie_id: u64) -> Result<()> {
    let movie = match ctx.catalog.details(movie_id).await {
        Ok(movie) => movie,
        Err(e) => {
            output.error(format!("Could not load movie {}: {}", movie_id, e));
            return Ok(());
        }
    };

    let mut sync = WatchlistSync::reconcile(&ctx.store, &ctx.session, movie.id).await?;
    let notifier = OutputNotifier { output };

    match sync.toggle(&ctx.store, &notifier, &movie).await {
        Ok(ToggleOutcome::SignInRequired) => {
            output.warn(format!(
                "Sign in first: flickdeck login <user-id>  ({})",
                Route::SignIn.path()
            ));
        }
        // The notifier already reported added/removed and failures
        Ok(_) => {}
        Err(e) => {
            tracing::warn!(movie_id, error = %e, "Watchlist toggle failed");
        }
    }
    Ok(())
}
