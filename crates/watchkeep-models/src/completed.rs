use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A completed-list membership record with rating and watch-count tracking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedEntry {
    pub completed_id: u64,
    pub movie_id: u64,
    pub rating: i32,
    pub times_watched: u32,
    pub date_last_watched: DateTime<Utc>,
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
    fn test_completed_entry_deserializes_rfc3339_date() {
        let json = r#"{
            "completed_id": 9,
            "movie_id": 42,
            "rating": 5,
            "times_watched": 2,
            "date_last_watched": "2026-03-14T20:00:00Z",
            "notes": "rewatch with friends",
            "title": "Blade Runner",
            "cover": ""
        }"#;
        let entry: CompletedEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.rating, 5);
        assert_eq!(entry.times_watched, 2);
        assert_eq!(entry.date_last_watched.to_rfc3339(), "2026-03-14T20:00:00+00:00");
    }
}
