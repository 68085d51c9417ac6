use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ApiConfig {
    /// Base URL of the watchlist service, e.g. "https://movies.example.com/api".
    #[serde(default)]
    pub base_url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Priority used when adding to the watchlist without an explicit value.
    #[serde(default = "default_priority")]
    pub priority: i32,
    /// Rating used when adding to the completed list without an explicit value.
    #[serde(default = "default_rating")]
    pub rating: i32,
}

fn default_page_size() -> usize {
    10
}

fn default_priority() -> i32 {
    1
}

fn default_rating() -> i32 {
    5
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
        }
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            priority: default_priority(),
            rating: default_rating(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load the config file, falling back to defaults when it does not exist
    /// yet. The defaults carry an empty base URL, which `validate` rejects.
    pub fn load_or_default(path: &PathBuf) -> anyhow::Result<Self> {
        if path.exists() {
            Self::load_from_file(path)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save_to_file(&self, path: &PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.api.base_url.is_empty() {
            return Err(anyhow::anyhow!(
                "No API base URL configured. Run `watchkeep config set --base-url <url>` first"
            ));
        }
        if self.catalog.page_size == 0 {
            return Err(anyhow::anyhow!("catalog.page_size must be greater than zero"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_config_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let config = Config {
            api: ApiConfig {
                base_url: "https://movies.example.com/api".to_string(),
            },
            catalog: CatalogConfig { page_size: 25 },
            defaults: DefaultsConfig {
                priority: 2,
                rating: 7,
            },
        };

        let path = file.path().to_path_buf();
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.api.base_url, "https://movies.example.com/api");
        assert_eq!(loaded.catalog.page_size, 25);
        assert_eq!(loaded.defaults.priority, 2);
        assert_eq!(loaded.defaults.rating, 7);
    }

    #[test]
    fn test_config_defaults_fill_missing_sections() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();
        std::fs::write(&path, "[api]\nbase_url = \"https://movies.example.com/api\"\n").unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded.catalog.page_size, 10);
        assert_eq!(loaded.defaults.priority, 1);
        assert_eq!(loaded.defaults.rating, 5);
        assert!(loaded.validate().is_ok());
    }

    #[test]
    fn test_config_validate_rejects_empty_base_url() {
        let config = Config::default();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_validate_rejects_zero_page_size() {
        let config = Config {
            api: ApiConfig {
                base_url: "https://movies.example.com/api".to_string(),
            },
            catalog: CatalogConfig { page_size: 0 },
            defaults: DefaultsConfig::default(),
        };
        assert!(config.validate().is_err());
    }
}
