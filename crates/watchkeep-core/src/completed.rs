use crate::project::sort_completed;
use tracing::debug;
use watchkeep_models::CompletedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletedSortKey {
    Rating,
    LastWatched,
}

/// The rating floor applies on manual decrement only; increments and
/// server-supplied values are unbounded.
pub fn decremented_rating(current: i32) -> i32 {
    (current - 1).max(0)
}

/// Completed-list view state. The sort key is applied on demand when
/// rendering and is not persisted as a preference.
#[derive(Debug, Default)]
pub struct CompletedState {
    entries: Vec<CompletedEntry>,
    error: Option<String>,
    generation: u64,
}

impl CompletedState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_request(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    fn is_stale(&self, generation: u64) -> bool {
        if generation != self.generation {
            debug!(generation, current = self.generation, "dropping stale completed-list response");
            return true;
        }
        false
    }

    pub fn apply_fetch(&mut self, generation: u64, result: Result<Vec<CompletedEntry>, String>) {
        if self.is_stale(generation) {
            return;
        }
        match result {
            Ok(entries) => {
                self.entries = entries;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
    }

    pub fn apply_rating(&mut self, generation: u64, entry_id: u64, rating: i32) {
        if self.is_stale(generation) {
            return;
        }
        for entry in &mut self.entries {
            if entry.completed_id == entry_id {
                entry.rating = rating;
            }
        }
        self.error = None;
    }

    pub fn apply_watched_again(&mut self, generation: u64, entry_id: u64) {
        if self.is_stale(generation) {
            return;
        }
        for entry in &mut self.entries {
            if entry.completed_id == entry_id {
                entry.times_watched += 1;
            }
        }
        self.error = None;
    }

    pub fn apply_remove(&mut self, generation: u64, entry_id: u64) {
        if self.is_stale(generation) {
            return;
        }
        self.entries.retain(|e| e.completed_id != entry_id);
        self.error = None;
    }

    pub fn apply_error(&mut self, generation: u64, message: String) {
        if self.is_stale(generation) {
            return;
        }
        self.error = Some(message);
    }

    /// Recomputed from the full local list every time.
    pub fn sorted_by(&self, key: CompletedSortKey) -> Vec<CompletedEntry> {
        let mut entries = self.entries.clone();
        sort_completed(&mut entries, key);
        entries
    }

    pub fn entries(&self) -> &[CompletedEntry] {
        &self.entries
    }

    pub fn find(&self, entry_id: u64) -> Option<&CompletedEntry> {
        self.entries.iter().find(|e| e.completed_id == entry_id)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
