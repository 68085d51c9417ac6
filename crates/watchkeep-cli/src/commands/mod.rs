pub mod completed;
pub mod config;
pub mod login;
pub mod movie;
pub mod movies;
pub mod watchlist;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use watchkeep_api::ApiClient;
use watchkeep_config::{Config, CredentialStore, PathManager, Session};

/// Load the validated config and build the API client from its base URL.
pub fn api_client(paths: &PathManager) -> Result<(Config, ApiClient)> {
    let config = Config::load_or_default(&paths.config_file())
        .map_err(|e| eyre!("Failed to load config: {}", e))?;
    config.validate().map_err(|e| eyre!("{}", e))?;
    let client = ApiClient::new(config.api.base_url.clone());
    Ok((config, client))
}

/// Rehydrate the session from the credentials file.
pub fn restore_session(paths: &PathManager) -> Result<Session> {
    let mut store = CredentialStore::new(paths.credentials_file());
    store
        .load()
        .map_err(|e| eyre!("Failed to load credentials: {}", e))?;
    Ok(Session::restore(&store))
}

/// Gate for protected commands. A token that is present but stale still
/// passes here; the server rejects it per call and that surfaces as an
/// ordinary inline failure, never a forced logout.
pub fn require_token(paths: &PathManager) -> Result<String> {
    let session = restore_session(paths)?;
    session
        .token()
        .map(|t| t.to_string())
        .ok_or_else(|| eyre!("You are not logged in. Run `watchkeep login` first"))
}
