use crate::commands::api_client;
use crate::output::Output;
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde_json::json;
use watchkeep_config::PathManager;
use watchkeep_core::CatalogState;

pub async fn run_movies(
    search: Option<String>,
    genre: Option<String>,
    page: usize,
    output: &Output,
) -> Result<()> {
    let paths = PathManager::default();
    let (config, client) = api_client(&paths)?;

    let mut state = CatalogState::new(config.catalog.page_size);
    if let Some(query) = search.as_deref() {
        state.set_query(query);
    }
    if let Some(genre) = genre.as_deref() {
        state.set_genre(genre);
    }

    let generation = state.begin_request();
    let spinner = output.spinner("Fetching catalog...");
    let result = client.movies().await.map_err(|e| e.message().to_string());
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    state.apply_fetch(generation, result);

    if let Some(err) = state.error() {
        output.error(err);
        return Ok(());
    }

    state.set_page(page);
    render_catalog(&state, output);
    Ok(())
}

fn render_catalog(state: &CatalogState, output: &Output) {
    let movies = state.current_page();

    output.data(&json!({
        "movies": &movies,
        "page": state.page(),
        "pages": state.page_count(),
    }));

    if movies.is_empty() {
        output.info("No movies matched your filters");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["ID", "Title", "Rating", "Genres"]);
    for movie in &movies {
        table.add_row(vec![
            movie.movie_id.to_string(),
            movie.title.clone(),
            format!("{:.1}", movie.vote_average),
            movie.genre.join(", "),
        ]);
    }
    output.println(table.to_string());

    // Navigation hints stand in for the previous/next buttons; an edge page
    // simply doesn't offer the hint.
    let mut nav = format!("Page {} of {}", state.page(), state.page_count());
    if state.has_prev() {
        nav.push_str(&format!("  |  previous: --page {}", state.page() - 1));
    }
    if state.has_next() {
        nav.push_str(&format!("  |  next: --page {}", state.page() + 1));
    }
    output.println(nav);
}
