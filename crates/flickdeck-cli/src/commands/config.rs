use color_eyre::Result;
use serde_json::json;

use crate::commands::AppContext;
use crate::output::{Output, OutputFormat};

fn mask(value: &str) -> String {
    if value.chars().count() <= 4 {
        "****".to_string()
    } else {
        let prefix: String = value.chars().take(4).collect();
        format!("{}****", prefix)
    }
}

/// Show the loaded configuration, masking credentials unless asked not to.
pub fn run_show(ctx: &AppContext, output: &Output, full: bool) -> Result<()> {
    let api_key = if full {
        ctx.config.catalog.api_key.clone()
    } else {
        mask(&ctx.config.catalog.api_key)
    };
    let anon_key = if full {
        ctx.config.store.anon_key.clone()
    } else {
        mask(&ctx.config.store.anon_key)
    };

    if let OutputFormat::Human = output.format() {
        output.heading("Catalog");
        output.info(format!("  base_url:       {}", ctx.config.catalog.base_url));
        output.info(format!(
            "  image_base_url: {}",
            ctx.config.catalog.image_base_url
        ));
        output.info(format!("  api_key:        {}", api_key));
        output.heading("Store");
        output.info(format!("  url:      {}", ctx.config.store.url));
        output.info(format!("  anon_key: {}", anon_key));
        output.heading("Session");
        match ctx.session.current_user_id() {
            Some(user_id) => output.info(format!("  signed in as {}", user_id)),
            None => output.info("  signed out"),
        }
    } else {
        output.json(&json!({
            "catalog": {
                "base_url": ctx.config.catalog.base_url,
                "image_base_url": ctx.config.catalog.image_base_url,
                "api_key": api_key,
            },
            "store": {
                "url": ctx.config.store.url,
                "anon_key": anon_key,
            },
            "session": {
                "user_id": ctx.session.current_user_id(),
            }
        }));
    }
    Ok(())
}
