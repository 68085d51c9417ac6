use tracing::debug;
use watchkeep_models::Movie;

/// Catalog view state: the fetched movie list plus client-side filtering and
/// pagination. Filtering recomputes a derived visible subset; the source
/// list is never mutated.
#[derive(Debug)]
pub struct CatalogState {
    movies: Vec<Movie>,
    query: String,
    genre: String,
    page: usize,
    page_size: usize,
    error: Option<String>,
    generation: u64,
}

impl CatalogState {
    pub fn new(page_size: usize) -> Self {
        Self {
            movies: Vec::new(),
            query: String::new(),
            genre: String::new(),
            page: 1,
            page_size: page_size.max(1),
            error: None,
            generation: 0,
        }
    }

    /// Issue a generation for an outgoing request. Results tagged with an
    /// older generation are discarded on application.
    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<Movie>, String>) {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale catalog response");
            return;
        }
        match result {
            Ok(movies) => {
                self.movies = movies;
                self.error = None;
                self.clamp_page();
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Case-insensitive substring match on title. Resets to the first page.
    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_lowercase();
        self.page = 1;
    }

    /// Exact inclusion of a genre tag. Resets to the first page.
    pub fn set_genre(&mut self, genre: &str) {
        self.genre = genre.to_string();
        self.page = 1;
    }

    /// The derived visible subset. An empty query and empty genre pass
    /// everything through, and filtering is idempotent by construction.
    pub fn filtered(&self) -> Vec<&Movie> {
        self.movies
            .iter()
            .filter(|m| self.query.is_empty() || m.title.to_lowercase().contains(&self.query))
            .filter(|m| self.genre.is_empty() || m.genre.iter().any(|g| g == &self.genre))
            .collect()
    }

    /// ceil(len / page_size); zero for an empty filtered list.
    pub fn page_count(&self) -> usize {
        let len = self.filtered().len();
        len.div_ceil(self.page_size)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Clamps into the valid range rather than failing.
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1).min(self.page_count().max(1));
    }

    fn clamp_page(&mut self) {
        self.page = self.page.min(self.page_count().max(1));
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.page_count()
    }

    /// The slice of the filtered subset visible on the current page.
    pub fn current_page(&self) -> Vec<&Movie> {
        let filtered = self.filtered();
        let start = (self.page - 1) * self.page_size;
        filtered.into_iter().skip(start).take(self.page_size).collect()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(movie_id: u64, title: &str, genres: &[&str]) -> Movie {
        Movie {
            movie_id,
            title: title.to_string(),
            cover: String::new(),
            overview: String::new(),
            runtime: 100,
            release_date: "2020-01-01".to_string(),
            vote_average: 7.0,
            genre: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn catalog_of(count: usize) -> CatalogState {
        let mut state = CatalogState::new(10);
        let gen = state.begin_request();
        let movies = (1..=count as u64)
            .map(|i| movie(i, &format!("Movie {}", i), &["Drama"]))
            .collect();
        state.apply_fetch(gen, Ok(movies));
        state
    }

    #[test]
    fn test_empty_filters_return_full_list() {
        let state = catalog_of(23);
        assert_eq!(state.filtered().len(), 23);
    }

    #[test]
    fn test_title_filter_is_case_insensitive_substring() {
        let mut state = CatalogState::new(10);
        let gen = state.begin_request();
        state.apply_fetch(
            gen,
            Ok(vec![
                movie(1, "Blade Runner", &["Science Fiction"]),
                movie(2, "The Runners", &["Drama"]),
                movie(3, "Heat", &["Drama"]),
            ]),
        );

        state.set_query("RUNNER");
        let titles: Vec<&str> = state.filtered().iter().map(|m| m.title.as_str()).collect();
        assert_eq!(titles, vec!["Blade Runner", "The Runners"]);
    }

    #[test]
    fn test_genre_filter_requires_exact_tag() {
        let mut state = CatalogState::new(10);
        let gen = state.begin_request();
        state.apply_fetch(
            gen,
            Ok(vec![
                movie(1, "Blade Runner", &["Science Fiction"]),
                movie(2, "Heat", &["Drama", "Action"]),
                movie(3, "Alien", &["Science Fiction", "Horror"]),
            ]),
        );

        state.set_genre("Science Fiction");
        assert_eq!(state.filtered().len(), 2);

        // A substring of a tag does not match.
        state.set_genre("Science");
        assert_eq!(state.filtered().len(), 0);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let mut state = catalog_of(30);
        state.set_query("movie 1");
        let first = state.filtered().len();
        state.set_query("movie 1");
        assert_eq!(state.filtered().len(), first);
    }

    #[test]
    fn test_page_count_is_ceiling() {
        assert_eq!(catalog_of(23).page_count(), 3);
        assert_eq!(catalog_of(5).page_count(), 1);
        assert_eq!(catalog_of(0).page_count(), 0);
    }

    #[test]
    fn test_exact_multiple_has_no_trailing_empty_page() {
        let mut state = catalog_of(20);
        assert_eq!(state.page_count(), 2);
        state.set_page(2);
        assert_eq!(state.current_page().len(), 10);
        assert!(!state.has_next());
    }

    #[test]
    fn test_prev_disabled_on_first_page_next_on_last() {
        let mut state = catalog_of(23);
        assert!(!state.has_prev());
        assert!(state.has_next());

        state.set_page(3);
        assert!(state.has_prev());
        assert!(!state.has_next());
        assert_eq!(state.current_page().len(), 3);
    }

    #[test]
    fn test_set_page_clamps_out_of_range() {
        let mut state = catalog_of(23);
        state.set_page(99);
        assert_eq!(state.page(), 3);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut state = catalog_of(30);
        state.set_page(3);
        state.set_query("movie");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_stale_fetch_is_discarded() {
        let mut state = CatalogState::new(10);
        let stale = state.begin_request();
        let fresh = state.begin_request();
        state.apply_fetch(fresh, Ok(vec![movie(1, "Heat", &["Drama"])]));

        // The response to the first request arrives late; it must not win.
        state.apply_fetch(stale, Ok(vec![movie(2, "Alien", &["Horror"])]));
        assert_eq!(state.filtered()[0].title, "Heat");
    }

    #[test]
    fn test_failed_fetch_keeps_prior_list_and_sets_error() {
        let mut state = catalog_of(5);
        let gen = state.begin_request();
        state.apply_fetch(gen, Err("Failed to fetch movies: 500".to_string()));
        assert_eq!(state.filtered().len(), 5);
        assert!(state.error().is_some());
    }
}
