use crate::commands::{api_client, require_token};
use crate::output::Output;
use clap::{Subcommand, ValueEnum};
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::json;
use watchkeep_config::PathManager;
use watchkeep_core::{decremented_rating, CompletedSortKey, CompletedState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortArg {
    Rating,
    Date,
}

impl From<SortArg> for CompletedSortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Rating => CompletedSortKey::Rating,
            SortArg::Date => CompletedSortKey::LastWatched,
        }
    }
}

#[derive(Subcommand)]
pub enum CompletedCommands {
    /// Show the completed list
    Show {
        /// Sort by rating or by last-watched date (both descending)
        #[arg(long, value_enum, default_value = "rating")]
        sort: SortArg,
    },

    /// Raise an entry's rating by one
    Up {
        /// Completed entry identifier
        entry_id: u64,
    },

    /// Lower an entry's rating by one (floors at zero)
    Down {
        /// Completed entry identifier
        entry_id: u64,
    },

    /// Record another watch of an entry
    Again {
        /// Completed entry identifier
        entry_id: u64,
    },

    /// Remove an entry from the completed list
    Remove {
        /// Completed entry identifier
        entry_id: u64,
    },
}

impl Default for CompletedCommands {
    fn default() -> Self {
        CompletedCommands::Show {
            sort: SortArg::Rating,
        }
    }
}

pub async fn run_completed(cmd: CompletedCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let (_config, client) = api_client(&paths)?;
    let token = require_token(&paths)?;

    let mut state = CompletedState::new();
    let generation = state.begin_request();
    let spinner = output.spinner("Fetching completed list...");
    let result = client
        .completed(&token)
        .await
        .map_err(|e| e.message().to_string());
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    state.apply_fetch(generation, result);

    if let Some(err) = state.error() {
        output.error(err);
        return Ok(());
    }

    let mut sort = CompletedSortKey::Rating;
    match cmd {
        CompletedCommands::Show { sort: arg } => sort = arg.into(),
        CompletedCommands::Up { entry_id } => {
            let Some(entry) = state.find(entry_id) else {
                output.error(format!("No completed entry {}", entry_id));
                return Ok(());
            };
            // Increment is unbounded; only the decrement clamps.
            let rating = entry.rating + 1;
            let generation = state.begin_request();
            match client.update_rating(&token, entry_id, rating).await {
                Ok(()) => {
                    state.apply_rating(generation, entry_id, rating);
                    output.success(format!("Rating set to {}", rating));
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
        CompletedCommands::Down { entry_id } => {
            let Some(entry) = state.find(entry_id) else {
                output.error(format!("No completed entry {}", entry_id));
                return Ok(());
            };
            let rating = decremented_rating(entry.rating);
            let generation = state.begin_request();
            match client.update_rating(&token, entry_id, rating).await {
                Ok(()) => {
                    state.apply_rating(generation, entry_id, rating);
                    output.success(format!("Rating set to {}", rating));
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
        CompletedCommands::Again { entry_id } => {
            if state.find(entry_id).is_none() {
                output.error(format!("No completed entry {}", entry_id));
                return Ok(());
            }
            let generation = state.begin_request();
            match client.increment_times_watched(&token, entry_id).await {
                Ok(()) => {
                    state.apply_watched_again(generation, entry_id);
                    output.success("Recorded another watch");
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
        CompletedCommands::Remove { entry_id } => {
            if state.find(entry_id).is_none() {
                output.error(format!("No completed entry {}", entry_id));
                return Ok(());
            }
            let generation = state.begin_request();
            match client.remove_from_completed(&token, entry_id).await {
                Ok(()) => {
                    state.apply_remove(generation, entry_id);
                    output.success("Removed from completed list");
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
    }

    if let Some(err) = state.error() {
        output.error(err);
        return Ok(());
    }

    render_completed(&state, sort, output);
    Ok(())
}

fn render_completed(state: &CompletedState, sort: CompletedSortKey, output: &Output) {
    let entries = state.sorted_by(sort);

    output.data(&json!({ "entries": &entries }));

    if entries.is_empty() {
        output.info("Your completed list is empty!");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Entry",
            "Movie",
            "Title",
            "Rating",
            "Watched",
            "Last watched",
            "Notes",
        ]);
    for entry in &entries {
        table.add_row(vec![
            entry.completed_id.to_string(),
            entry.movie_id.to_string(),
            entry.title.clone(),
            entry.rating.to_string(),
            entry.times_watched.to_string(),
            entry.date_last_watched.format("%Y-%m-%d").to_string(),
            entry.notes.clone().unwrap_or_default(),
        ]);
    }
    output.println(table.to_string());
}
