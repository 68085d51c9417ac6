use serde::{Deserialize, Serialize};

/// A "to watch" list membership record, distinct from the Movie it references.
/// The server denormalizes title and cover into each entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WatchlistEntry {
    pub towatch_id: u64,
    pub movie_id: u64,
    pub priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub cover: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watchlist_entry_notes_optional() {
        let json = r#"{
            "towatch_id": 3,
            "movie_id": 42,
            "priority": 1,
            "title": "Blade Runner",
            "cover": ""
        }"#;
        let entry: WatchlistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.towatch_id, 3);
        assert_eq!(entry.notes, None);
    }

    #[test]
    fn test_watchlist_entry_negative_priority_accepted() {
        // The server does not bound priority; the client must round-trip
        // whatever it stores.
        let json = r#"{"towatch_id": 1, "movie_id": 2, "priority": -4, "title": "x", "cover": ""}"#;
        let entry: WatchlistEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.priority, -4);
    }
}
