//! Centralized sort projections, applied uniformly after every state
//! transition instead of being re-derived ad hoc per action.

use crate::completed::CompletedSortKey;
use watchkeep_models::{CompletedEntry, WatchlistEntry};

/// Descending priority; stable among ties, so equal-priority entries keep
/// their server order.
pub fn sort_by_priority(entries: &mut [WatchlistEntry]) {
    entries.sort_by(|a, b| b.priority.cmp(&a.priority));
}

/// Descending by the requested key; stable among ties.
pub fn sort_completed(entries: &mut [CompletedEntry], key: CompletedSortKey) {
    match key {
        CompletedSortKey::Rating => entries.sort_by(|a, b| b.rating.cmp(&a.rating)),
        CompletedSortKey::LastWatched => {
            entries.sort_by(|a, b| b.date_last_watched.cmp(&a.date_last_watched))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn entry(towatch_id: u64, priority: i32) -> WatchlistEntry {
        WatchlistEntry {
            towatch_id,
            movie_id: towatch_id * 100,
            priority,
            notes: None,
            title: format!("Movie {}", towatch_id),
            cover: String::new(),
        }
    }

    fn completed(completed_id: u64, rating: i32, day: u32) -> CompletedEntry {
        CompletedEntry {
            completed_id,
            movie_id: completed_id * 100,
            rating,
            times_watched: 1,
            date_last_watched: Utc.with_ymd_and_hms(2026, 1, day, 12, 0, 0).unwrap(),
            notes: None,
            title: format!("Movie {}", completed_id),
            cover: String::new(),
        }
    }

    #[test]
    fn test_sort_by_priority_descending() {
        let mut entries = vec![entry(1, 1), entry(2, 5), entry(3, 3)];
        sort_by_priority(&mut entries);
        let priorities: Vec<i32> = entries.iter().map(|e| e.priority).collect();
        assert_eq!(priorities, vec![5, 3, 1]);
    }

    #[test]
    fn test_sort_by_priority_ties_are_stable() {
        let mut entries = vec![entry(1, 2), entry(2, 2), entry(3, 2), entry(4, 9)];
        sort_by_priority(&mut entries);
        let ids: Vec<u64> = entries.iter().map(|e| e.towatch_id).collect();
        assert_eq!(ids, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_sort_by_priority_handles_negative_values() {
        let mut entries = vec![entry(1, -3), entry(2, 0), entry(3, -1)];
        sort_by_priority(&mut entries);
        let ids: Vec<u64> = entries.iter().map(|e| e.towatch_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_completed_by_rating() {
        let mut entries = vec![completed(1, 3, 1), completed(2, 8, 2), completed(3, 5, 3)];
        sort_completed(&mut entries, CompletedSortKey::Rating);
        let ids: Vec<u64> = entries.iter().map(|e| e.completed_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_completed_by_last_watched() {
        let mut entries = vec![completed(1, 9, 5), completed(2, 1, 20), completed(3, 5, 10)];
        sort_completed(&mut entries, CompletedSortKey::LastWatched);
        let ids: Vec<u64> = entries.iter().map(|e| e.completed_id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }
}
