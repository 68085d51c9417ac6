use serde::{Deserialize, Serialize};

/// A catalog movie as returned by the server. Fetched, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Movie {
    pub movie_id: u64,
    pub title: String,
    #[serde(default)]
    pub cover: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub runtime: u32,
    /// Kept as the server's display string; never interpreted client-side.
    #[serde(default)]
    pub release_date: String,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub genre: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_deserializes_server_shape() {
        let json = r#"{
            "movie_id": 42,
            "title": "Blade Runner",
            "cover": "https://img.example/42.jpg",
            "overview": "A blade runner must pursue replicants.",
            "runtime": 117,
            "release_date": "1982-06-25",
            "vote_average": 8.1,
            "genre": ["Science Fiction", "Drama"]
        }"#;

        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.movie_id, 42);
        assert_eq!(movie.title, "Blade Runner");
        assert_eq!(movie.genre.len(), 2);
    }

    #[test]
    fn test_movie_tolerates_missing_optional_fields() {
        // Some catalog rows omit overview/genre; only id and title are required.
        let json = r#"{"movie_id": 7, "title": "Stalker"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.movie_id, 7);
        assert!(movie.genre.is_empty());
        assert_eq!(movie.vote_average, 0.0);
    }
}
