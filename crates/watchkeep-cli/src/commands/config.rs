use crate::commands::restore_session;
use crate::output::Output;
use clap::Subcommand;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use serde_json::json;
use watchkeep_config::{Config, PathManager};

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the current configuration and login status
    Show,

    /// Change configuration values
    Set {
        /// Base URL of the watchlist service
        #[arg(long, value_name = "URL")]
        base_url: Option<String>,

        /// Movies shown per catalog page
        #[arg(long, value_name = "N")]
        page_size: Option<usize>,

        /// Priority used for quick watchlist adds
        #[arg(long, value_name = "P")]
        default_priority: Option<i32>,

        /// Rating used when marking entries watched
        #[arg(long, value_name = "R")]
        default_rating: Option<i32>,
    },
}

pub fn run_config(cmd: ConfigCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();

    match cmd {
        ConfigCommands::Show => {
            let config = Config::load_or_default(&paths.config_file())
                .map_err(|e| eyre!("Failed to load config: {}", e))?;
            let session = restore_session(&paths)?;

            output.data(&json!({
                "base_url": config.api.base_url,
                "page_size": config.catalog.page_size,
                "default_priority": config.defaults.priority,
                "default_rating": config.defaults.rating,
                "logged_in": session.is_authenticated(),
            }));

            let base_url = if config.api.base_url.is_empty() {
                "(not set)".to_string()
            } else {
                config.api.base_url.clone()
            };
            output.println(format!("Base URL:         {}", base_url));
            output.println(format!("Page size:        {}", config.catalog.page_size));
            output.println(format!("Default priority: {}", config.defaults.priority));
            output.println(format!("Default rating:   {}", config.defaults.rating));
            output.println(format!(
                "Session:          {}",
                if session.is_authenticated() {
                    "logged in"
                } else {
                    "not logged in"
                }
            ));
        }
        ConfigCommands::Set {
            base_url,
            page_size,
            default_priority,
            default_rating,
        } => {
            if base_url.is_none()
                && page_size.is_none()
                && default_priority.is_none()
                && default_rating.is_none()
            {
                output.warn("Nothing to set. Use --base-url, --page-size, --default-priority, or --default-rating");
                return Ok(());
            }

            let mut config = Config::load_or_default(&paths.config_file())
                .map_err(|e| eyre!("Failed to load config: {}", e))?;
            if let Some(url) = base_url {
                config.api.base_url = url;
            }
            if let Some(size) = page_size {
                config.catalog.page_size = size;
            }
            if let Some(priority) = default_priority {
                config.defaults.priority = priority;
            }
            if let Some(rating) = default_rating {
                config.defaults.rating = rating;
            }

            // Reject a zero page size or an emptied base URL before writing.
            config.validate().map_err(|e| eyre!("{}", e))?;
            paths
                .ensure_directories()
                .map_err(|e| eyre!("Failed to create config directory: {}", e))?;
            config
                .save_to_file(&paths.config_file())
                .map_err(|e| eyre!("Failed to save config: {}", e))?;
            output.success(format!("Configuration saved to {}", paths.config_file().display()));
        }
    }

    Ok(())
}
