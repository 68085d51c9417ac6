use crate::error::ApiError;
use reqwest::{Client, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;
use watchkeep_models::{CompletedEntry, Movie, WatchlistEntry};

/// Header carrying the opaque session token on protected endpoints.
pub const AUTH_HEADER: &str = "X-API-KEY";

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    username: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    api: String,
}

#[derive(Debug, Serialize)]
struct AddWatchlistRequest<'a> {
    movie_id: u64,
    priority: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct NotesPatch<'a> {
    notes: &'a str,
}

#[derive(Debug, Serialize)]
struct PriorityPatch {
    priority: i32,
}

#[derive(Debug, Serialize)]
struct AddCompletedRequest<'a> {
    movie_id: u64,
    rating: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct RatingPatch {
    rating: i32,
}

/// One method per remote capability. Each call is a single round trip; no
/// retry, no caching. Protected calls attach the token as `X-API-KEY`.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fold a non-success response into the uniform error, consuming the
    /// body into the message.
    async fn check(response: Response, action: &str) -> Result<Response, ApiError> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::new(format!(
                "Failed to {}: {} - {}",
                action, status, body
            )));
        }
        Ok(response)
    }

    /// Fetch the full movie catalog. Unauthenticated.
    pub async fn movies(&self) -> Result<Vec<Movie>, ApiError> {
        let url = self.url("/movies");
        debug!(%url, "fetching catalog");
        let response = self.http.get(&url).send().await?;
        let response = Self::check(response, "fetch movies").await?;
        Ok(response.json().await?)
    }

    /// Fetch one movie's details. Unauthenticated.
    pub async fn movie(&self, movie_id: u64) -> Result<Movie, ApiError> {
        let url = self.url(&format!("/movies/{}", movie_id));
        debug!(%url, "fetching movie details");
        let response = self.http.get(&url).send().await?;
        let response = Self::check(response, "fetch movie details").await?;
        Ok(response.json().await?)
    }

    /// Exchange credentials for an opaque token.
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let url = self.url("/users/session");
        debug!(%url, username, "logging in");
        let response = self
            .http
            .post(&url)
            .json(&LoginRequest { username, password })
            .send()
            .await?;
        let response = Self::check(response, "log in").await?;
        let body: LoginResponse = response.json().await?;
        Ok(body.api)
    }

    /// Fetch the "to watch" list.
    pub async fn watchlist(&self, token: &str) -> Result<Vec<WatchlistEntry>, ApiError> {
        let url = self.url("/towatchlist/entries");
        debug!(%url, "fetching watchlist");
        let response = self.http.get(&url).header(AUTH_HEADER, token).send().await?;
        let response = Self::check(response, "fetch watchlist").await?;
        Ok(response.json().await?)
    }

    pub async fn add_to_watchlist(
        &self,
        token: &str,
        movie_id: u64,
        priority: i32,
        notes: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.url("/towatchlist/entries");
        debug!(%url, movie_id, priority, "adding to watchlist");
        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, token)
            .json(&AddWatchlistRequest {
                movie_id,
                priority,
                notes,
            })
            .send()
            .await?;
        Self::check(response, "add to watchlist").await?;
        Ok(())
    }

    pub async fn update_watchlist_notes(
        &self,
        token: &str,
        entry_id: u64,
        notes: &str,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/towatchlist/entries/{}/notes", entry_id));
        debug!(%url, "updating watchlist notes");
        let response = self
            .http
            .patch(&url)
            .header(AUTH_HEADER, token)
            .json(&NotesPatch { notes })
            .send()
            .await?;
        Self::check(response, "update notes").await?;
        Ok(())
    }

    pub async fn update_watchlist_priority(
        &self,
        token: &str,
        entry_id: u64,
        priority: i32,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/towatchlist/entries/{}/priority", entry_id));
        debug!(%url, priority, "updating watchlist priority");
        let response = self
            .http
            .patch(&url)
            .header(AUTH_HEADER, token)
            .json(&PriorityPatch { priority })
            .send()
            .await?;
        Self::check(response, "update priority").await?;
        Ok(())
    }

    pub async fn remove_from_watchlist(&self, token: &str, entry_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("/towatchlist/entries/{}", entry_id));
        debug!(%url, "removing watchlist entry");
        let response = self
            .http
            .delete(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await?;
        Self::check(response, "remove from watchlist").await?;
        Ok(())
    }

    /// Fetch the completed list.
    pub async fn completed(&self, token: &str) -> Result<Vec<CompletedEntry>, ApiError> {
        let url = self.url("/completedwatchlist/entries");
        debug!(%url, "fetching completed list");
        let response = self.http.get(&url).header(AUTH_HEADER, token).send().await?;
        let response = Self::check(response, "fetch completed list").await?;
        Ok(response.json().await?)
    }

    pub async fn add_to_completed(
        &self,
        token: &str,
        movie_id: u64,
        rating: i32,
        notes: Option<&str>,
    ) -> Result<(), ApiError> {
        let url = self.url("/completedwatchlist/entries");
        debug!(%url, movie_id, rating, "adding to completed list");
        let response = self
            .http
            .post(&url)
            .header(AUTH_HEADER, token)
            .json(&AddCompletedRequest {
                movie_id,
                rating,
                notes,
            })
            .send()
            .await?;
        Self::check(response, "add to completed list").await?;
        Ok(())
    }

    pub async fn update_rating(
        &self,
        token: &str,
        entry_id: u64,
        rating: i32,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!("/completedwatchlist/entries/{}/rating", entry_id));
        debug!(%url, rating, "updating rating");
        let response = self
            .http
            .patch(&url)
            .header(AUTH_HEADER, token)
            .json(&RatingPatch { rating })
            .send()
            .await?;
        Self::check(response, "update rating").await?;
        Ok(())
    }

    /// Server-side increment; the PATCH carries no body.
    pub async fn increment_times_watched(
        &self,
        token: &str,
        entry_id: u64,
    ) -> Result<(), ApiError> {
        let url = self.url(&format!(
            "/completedwatchlist/entries/{}/times-watched",
            entry_id
        ));
        debug!(%url, "incrementing times watched");
        let response = self
            .http
            .patch(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await?;
        Self::check(response, "increment times watched").await?;
        Ok(())
    }

    pub async fn remove_from_completed(&self, token: &str, entry_id: u64) -> Result<(), ApiError> {
        let url = self.url(&format!("/completedwatchlist/entries/{}", entry_id));
        debug!(%url, "removing completed entry");
        let response = self
            .http
            .delete(&url)
            .header(AUTH_HEADER, token)
            .send()
            .await?;
        Self::check(response, "remove from completed list").await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("https://api.example.com/v1/");
        assert_eq!(client.base_url(), "https://api.example.com/v1");
        assert_eq!(client.url("/movies"), "https://api.example.com/v1/movies");
    }
}
