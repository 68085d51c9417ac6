use crate::commands::{api_client, require_token};
use crate::output::Output;
use clap::Subcommand;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::json;
use watchkeep_api::ApiClient;
use watchkeep_config::PathManager;
use watchkeep_core::WatchlistState;

#[derive(Subcommand)]
pub enum WatchlistCommands {
    /// Show the watchlist, sorted by descending priority
    Show,

    /// Raise an entry's priority by one
    Up {
        /// Watchlist entry identifier
        entry_id: u64,
    },

    /// Lower an entry's priority by one
    Down {
        /// Watchlist entry identifier
        entry_id: u64,
    },

    /// Replace the notes on an entry
    Notes {
        /// Watchlist entry identifier
        entry_id: u64,
        /// New note text
        notes: String,
    },

    /// Mark an entry as watched, promoting it to the completed list
    Watched {
        /// Watchlist entry identifier
        entry_id: u64,
    },

    /// Remove an entry from the watchlist
    Remove {
        /// Watchlist entry identifier
        entry_id: u64,
    },
}

pub async fn run_watchlist(cmd: WatchlistCommands, output: &Output) -> Result<()> {
    let paths = PathManager::default();
    let (config, client) = api_client(&paths)?;
    let token = require_token(&paths)?;

    // Every action starts from a fresh server snapshot; mutations are then
    // applied locally only after the server confirms.
    let mut state = WatchlistState::new();
    let generation = state.begin_request();
    let spinner = output.spinner("Fetching watchlist...");
    let result = client
        .watchlist(&token)
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

    match cmd {
        WatchlistCommands::Show => {}
        WatchlistCommands::Up { entry_id } => {
            adjust_priority(&client, &token, &mut state, entry_id, 1, output).await;
        }
        WatchlistCommands::Down { entry_id } => {
            adjust_priority(&client, &token, &mut state, entry_id, -1, output).await;
        }
        WatchlistCommands::Notes { entry_id, notes } => {
            if state.find(entry_id).is_none() {
                output.error(format!("No watchlist entry {}", entry_id));
                return Ok(());
            }
            let generation = state.begin_request();
            match client
                .update_watchlist_notes(&token, entry_id, &notes)
                .await
            {
                Ok(()) => {
                    state.apply_notes(generation, entry_id, notes);
                    output.success("Notes updated");
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
        WatchlistCommands::Watched { entry_id } => {
            let Some(entry) = state.find(entry_id) else {
                output.error(format!("No watchlist entry {}", entry_id));
                return Ok(());
            };
            let movie_id = entry.movie_id;
            let title = entry.title.clone();

            // Promotion is two independent calls: add to completed, then
            // remove from the watchlist. The completed view is not consulted.
            if let Err(e) = client
                .add_to_completed(&token, movie_id, config.defaults.rating, None)
                .await
            {
                output.error(e.message());
                return Ok(());
            }
            let generation = state.begin_request();
            match client.remove_from_watchlist(&token, entry_id).await {
                Ok(()) => {
                    state.apply_mark_watched(generation, entry_id);
                    output.success(format!("Marked \"{}\" as watched", title));
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
        WatchlistCommands::Remove { entry_id } => {
            if state.find(entry_id).is_none() {
                output.error(format!("No watchlist entry {}", entry_id));
                return Ok(());
            }
            let generation = state.begin_request();
            match client.remove_from_watchlist(&token, entry_id).await {
                Ok(()) => {
                    state.apply_remove(generation, entry_id);
                    output.success("Removed from watchlist");
                }
                Err(e) => state.apply_error(generation, e.message().to_string()),
            }
        }
    }

    if let Some(err) = state.error() {
        output.error(err);
        return Ok(());
    }

    render_watchlist(&state, output);
    Ok(())
}

async fn adjust_priority(
    client: &ApiClient,
    token: &str,
    state: &mut WatchlistState,
    entry_id: u64,
    delta: i32,
    output: &Output,
) {
    let Some(entry) = state.find(entry_id) else {
        output.error(format!("No watchlist entry {}", entry_id));
        return;
    };
    // Priority is unbounded in both directions.
    let priority = entry.priority + delta;

    let generation = state.begin_request();
    match client
        .update_watchlist_priority(token, entry_id, priority)
        .await
    {
        Ok(()) => {
            state.apply_priority(generation, entry_id, priority);
            output.success(format!("Priority set to {}", priority));
        }
        Err(e) => state.apply_error(generation, e.message().to_string()),
    }
}

fn render_watchlist(state: &WatchlistState, output: &Output) {
    output.data(&json!({ "entries": state.entries() }));

    if state.is_empty() {
        output.info("Your watchlist is empty!");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Entry", "Movie", "Title", "Priority", "Notes"]);
    for entry in state.entries() {
        table.add_row(vec![
            entry.towatch_id.to_string(),
            entry.movie_id.to_string(),
            entry.title.clone(),
            entry.priority.to_string(),
            entry.notes.clone().unwrap_or_default(),
        ]);
    }
    output.println(table.to_string());
}
