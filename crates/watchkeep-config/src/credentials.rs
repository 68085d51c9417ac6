use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use toml;

const API_TOKEN_KEY: &str = "api_token";
const USERNAME_KEY: &str = "username";

#[derive(Debug, Serialize, Deserialize, Default)]
struct CredentialsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Durable client-side storage for the session token. A page-reload in the
/// original app corresponds to a new process here, so the token is mirrored
/// to a flat TOML file and restored at startup.
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let creds_data: CredentialsData = toml::from_str(&content)?;
            self.credentials = creds_data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let creds_data = CredentialsData {
            data: self.credentials.clone(),
        };
        let content = toml::to_string_pretty(&creds_data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.credentials.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.credentials.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.credentials.remove(key);
    }

    pub fn get_api_token(&self) -> Option<&String> {
        self.get(API_TOKEN_KEY)
    }

    pub fn set_api_token(&mut self, token: String) {
        self.set(API_TOKEN_KEY.to_string(), token);
    }

    pub fn clear_api_token(&mut self) {
        self.remove(API_TOKEN_KEY);
    }

    pub fn get_username(&self) -> Option<&String> {
        self.get(USERNAME_KEY)
    }

    pub fn set_username(&mut self, username: String) {
        self.set(USERNAME_KEY.to_string(), username);
    }
}
