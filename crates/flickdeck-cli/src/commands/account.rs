use color_eyre::Result;
use chrono::{Duration, Utc};
use flickdeck_core::{load_profile, ProfileScreen, Route};
use flickdeck_store::AuthEvent;
use serde_json::json;

use crate::commands::AppContext;
use crate::output::{Output, OutputFormat};

pub async fn run_profile(ctx: &AppContext, output: &Output) -> Result<()> {
    match load_profile(&ctx.store, &ctx.session).await {
        ProfileScreen::SignInRequired => {
            output.warn(format!(
                "Sign in to see your profile ({})",
                Route::SignIn.path()
            ));
        }
        ProfileScreen::Loaded(None) => output.info("No profile found"),
        ProfileScreen::Loaded(Some(profile)) => {
            if let OutputFormat::Human = output.format() {
                output.heading(profile.name.as_deref().unwrap_or("User"));
                if let Some(email) = &profile.email {
                    output.info(format!("Email: {}", email));
                }
                if let Some(avatar) = &profile.avatar_url {
                    output.info(format!("Avatar: {}", avatar));
                }
            } else {
                output.json(&json!(profile));
            }
        }
    }
    Ok(())
}

/// Record a session in the credential store so later invocations run
/// signed in. Stands in for the external auth collaborator's sign-in
/// notification; the auth protocol itself is out of scope.
pub async fn run_login(
    ctx: &AppContext,
    output: &Output,
    user_id: &str,
    access_token: Option<&str>,
) -> Result<()> {
    let mut creds = ctx.credentials()?;
    creds.set_session_user_id(user_id.to_string());
    if let Some(token) = access_token {
        creds.set_session_access_token(token.to_string());
    }
    creds.set_session_expires(Utc::now() + Duration::hours(24));
    creds
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save credentials: {}", e))?;

    ctx.session.apply(AuthEvent::SignedIn {
        user_id: user_id.to_string(),
    });

    output.success(format!("Signed in as {}", user_id));
    Ok(())
}

pub async fn run_logout(ctx: &AppContext, output: &Output) -> Result<()> {
    let mut creds = ctx.credentials()?;
    creds.clear_session();
    creds
        .save()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to save credentials: {}", e))?;

    ctx.session.apply(AuthEvent::SignedOut);

    output.success("Signed out");
    Ok(())
}
