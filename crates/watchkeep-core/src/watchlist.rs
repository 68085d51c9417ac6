use crate::project::sort_by_priority;
use tracing::debug;
use watchkeep_models::WatchlistEntry;

/// Watchlist view state. Entries are kept sorted by descending priority
/// after every fetch and every confirmed mutation. Mutations here are only
/// applied after the server call succeeds; a failed call sets the error
/// message and leaves the list untouched.
#[derive(Debug, Default)]
pub struct WatchlistState {
    entries: Vec<WatchlistEntry>,
    error: Option<String>,
    generation: u64,
}

impl WatchlistState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale watchlist response");
            return true;
        }
        false
    }

    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<WatchlistEntry>, String>) {
        if self.is_stale(generation) {
            return;
        }
        match result {
            Ok(mut entries) => {
                sort_by_priority(&mut entries);
                self.entries = entries;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    /// Only the matching entry's priority changes; the list re-sorts.
    pub fn apply_priority(&mut self, generation: u64, entry_id: u64, priority: i32) {
        if self.is_stale(generation) {
            return;
        }
        for entry in &mut self.entries {
            if entry.towatch_id == entry_id {
                entry.priority = priority;
            }
        }
        sort_by_priority(&mut self.entries);
        self.error = None;
    }

    pub fn apply_notes(&mut self, generation: u64, entry_id: u64, notes: String) {
        if self.is_stale(generation) {
            return;
        }
        for entry in &mut self.entries {
            if entry.towatch_id == entry_id {
                entry.notes = Some(notes.clone());
            }
        }
        self.error = None;
    }

    pub fn apply_remove(&mut self, generation: u64, entry_id: u64) {
        if self.is_stale(generation) {
            return;
        }
        self.entries.retain(|e| e.towatch_id != entry_id);
        self.error = None;
    }

    /// Promotion: the completed-list addition already succeeded, so the
    /// entry leaves the local watchlist without consulting the completed
    /// view at all.
    pub fn apply_mark_watched(&mut self, generation: u64, entry_id: u64) {
        self.apply_remove(generation, entry_id);
    }

    pub fn apply_error(&mut self, generation: u64, message: String) {
        if self.is_stale(generation) {
            return;
        }
        self.error = Some(message);
    }

    pub fn entries(&self) -> &[WatchlistEntry] {
        &self.entries
    }

    pub fn find(&self, entry_id: u64) -> Option<&WatchlistEntry> {
        self.entries.iter().find(|e| e.towatch_id == entry_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(towatch_id: u64, movie_id: u64, priority: i32) -> WatchlistEntry {
        WatchlistEntry {
            towatch_id,
            movie_id,
            priority,
            notes: None,
            title: format!("Movie {}", movie_id),
            cover: String::new(),
        }
    }

    fn fetched(entries: Vec<WatchlistEntry>) -> WatchlistState {
        let mut state = WatchlistState::new();
        let gen = state.begin_request();
        state.apply_fetch(gen, Ok(entries));
        state
    }

    #[test]
    fn test_fetch_sorts_by_descending_priority() {
        let state = fetched(vec![entry(1, 10, 1), entry(2, 20, 4), entry(3, 30, 2)]);
        let priorities: Vec<i32> = state.entries().iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![4, 2, 1]);
    }

    #[test]
    fn test_priority_update_touches_only_matching_entry() {
        let mut state = fetched(vec![entry(1, 10, 3), entry(2, 20, 2), entry(3, 30, 1)]);
        let before: Vec<WatchlistEntry> = state.entries().to_vec();

        let gen = state.begin_request();
        state.apply_priority(gen, 2, 5);

        for e in state.entries() {
            if e.towatch_id == 2 {
                assert_eq!(e.priority, 5);
            } else {
                let prev = before.iter().find(|b| b.towatch_id == e.towatch_id).unwrap();
                assert_eq!(e, prev);
            }
        }
    }

    #[test]
    fn test_priority_raise_moves_entry_ahead() {
        // Add movie 42 at priority 1, then raise it to 2: it must sort ahead
        // of everything with priority < 2.
        let mut state = fetched(vec![entry(1, 10, 1), entry(7, 42, 1)]);
        let gen = state.begin_request();
        state.apply_priority(gen, 7, 2);
        assert_eq!(state.entries()[0].movie_id, 42);
    }

    #[test]
    fn test_remove_drops_only_matching_key() {
        let mut state = fetched(vec![entry(1, 10, 3), entry(2, 20, 2), entry(3, 30, 1)]);
        let gen = state.begin_request();
        state.apply_remove(gen, 2);

        assert_eq!(state.entries().len(), 2);
        assert!(state.find(2).is_none());
        assert!(state.find(1).is_some());
        assert!(state.find(3).is_some());
    }

    #[test]
    fn test_mark_watched_removes_entry_locally() {
        let mut state = fetched(vec![entry(1, 10, 3), entry(2, 20, 2)]);
        let gen = state.begin_request();
        state.apply_mark_watched(gen, 1);
        assert!(state.find(1).is_none());
        assert_eq!(state.entries().len(), 1);
    }

    #[test]
    fn test_failed_call_leaves_state_unchanged_and_sets_error() {
        let mut state = fetched(vec![entry(1, 10, 3), entry(2, 20, 2)]);
        let before: Vec<WatchlistEntry> = state.entries().to_vec();

        let gen = state.begin_request();
        state.apply_error(gen, "Failed to update priority: 500 - ".to_string());

        assert_eq!(state.entries(), before.as_slice());
        assert!(!state.error().unwrap().is_empty());
    }

    #[test]
    fn test_error_cleared_by_next_successful_application() {
        let mut state = fetched(vec![entry(1, 10, 3)]);
        let gen = state.begin_request();
        state.apply_error(gen, "boom".to_string());

        let gen = state.begin_request();
        state.apply_remove(gen, 1);
        assert!(state.error().is_none());
    }

    #[test]
    fn test_stale_mutation_is_discarded() {
        let mut state = fetched(vec![entry(1, 10, 3), entry(2, 20, 2)]);
        let stale = state.begin_request();
        let fresh = state.begin_request();
        state.apply_remove(fresh, 2);

        // A late confirmation from the superseded request is a lost update,
        // not a corruption.
        state.apply_priority(stale, 1, 9);
        assert_eq!(state.find(1).unwrap().priority, 3);
    }

    #[test]
    fn test_sorted_after_every_mutation_with_ties() {
        let mut state = fetched(vec![
            entry(1, 10, 2),
            entry(2, 20, 2),
            entry(3, 30, 2),
        ]);
        let gen = state.begin_request();
        state.apply_priority(gen, 3, 2);

        // Ties keep their relative order.
        let ids: Vec<u64> = state.entries().iter().map(|e| e.towatch_id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
