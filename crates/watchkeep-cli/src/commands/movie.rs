use crate::commands::{api_client, require_token};
use crate::output::Output;
use color_eyre::Result;
use serde_json::json;
use watchkeep_config::PathManager;
use watchkeep_models::Movie;

#[allow(clippy::too_many_arguments)]
pub async fn run_movie(
    id: u64,
    to_watch: bool,
    watched: bool,
    notes: Option<String>,
    priority: Option<i32>,
    rating: Option<i32>,
    output: &Output,
) -> Result<()> {
    let paths = PathManager::default();
    let (config, client) = api_client(&paths)?;

    let spinner = output.spinner("Fetching movie details...");
    let result = client.movie(id).await;
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }

    let movie = match result {
        Ok(movie) => movie,
        Err(e) => {
            output.error(e.message());
            return Ok(());
        }
    };

    render_details(&movie, output);

    // Adds are auth-gated; the detail view itself is public.
    if to_watch || watched {
        let token = require_token(&paths)?;

        if to_watch {
            let priority = priority.unwrap_or(config.defaults.priority);
            match client
                .add_to_watchlist(&token, id, priority, notes.as_deref())
                .await
            {
                Ok(()) => output.success(format!(
                    "Added \"{}\" to your watchlist (priority {})",
                    movie.title, priority
                )),
                Err(e) => output.error(e.message()),
            }
        }

        if watched {
            let rating = rating.unwrap_or(config.defaults.rating);
            match client
                .add_to_completed(&token, id, rating, notes.as_deref())
                .await
            {
                Ok(()) => output.success(format!(
                    "Added \"{}\" to your completed list (rating {})",
                    movie.title, rating
                )),
                Err(e) => output.error(e.message()),
            }
        }
    }

    Ok(())
}

fn render_details(movie: &Movie, output: &Output) {
    output.data(&json!(&movie));

    output.println(format!("{} ({})", movie.title, movie.release_date));
    output.println(format!("Runtime: {} minutes", movie.runtime));
    output.println(format!("Rating: {:.1}", movie.vote_average));
    if !movie.genre.is_empty() {
        output.println(format!("Genres: {}", movie.genre.join(", ")));
    }
    if !movie.overview.is_empty() {
        output.println("");
        output.println(&movie.overview);
    }
}
