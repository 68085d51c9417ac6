pub mod config;
pub mod credentials;
pub mod paths;
pub mod session;

pub use config::{ApiConfig, CatalogConfig, Config, DefaultsConfig};
pub use credentials::CredentialStore;
pub use paths::PathManager;
pub use session::Session;
