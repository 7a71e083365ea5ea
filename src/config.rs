use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    /// Override for the log directory; defaults to the platform data dir.
    #[serde(default)]
    pub log_dir: Option<PathBuf>,
}

/// Connection details for the hosted backend that owns all persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Project API key, sent as the `apikey` header.
    #[serde(default)]
    pub api_key: String,

    /// Session access token, sent as a bearer token.
    #[serde(default)]
    pub access_token: String,

    /// Row owner for every fetch and write.
    #[serde(default)]
    pub user_id: String,

    #[serde(default = "default_bucket")]
    pub bucket: String,
}

fn default_endpoint() -> String {
    "http://127.0.0.1:54321".to_string()
}

fn default_bucket() -> String {
    "progress-photos".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: String::new(),
            access_token: String::new(),
            user_id: String::new(),
            bucket: default_bucket(),
        }
    }
}

impl Config {
    /// Load the config, creating a default file on first run.
    ///
    /// An explicit `path` (from `--config`) wins over the default location
    /// under the platform config dir.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            let config = Config::default();
            config.save_to(&config_path)?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;

        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("formcheck")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.bucket, "progress-photos");
        assert!(config.backend.user_id.is_empty());
        assert!(config.log_dir.is_none());
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let config = Config::load(Some(&path)).unwrap();
        assert!(path.exists());
        assert_eq!(config.backend.endpoint, default_endpoint());
    }

    #[test]
    fn test_load_round_trips_saved_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.backend.user_id = "user-42".to_string();
        config.backend.endpoint = "https://project.example.co".to_string();
        config.save_to(&path).unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.backend.user_id, "user-42");
        assert_eq!(loaded.backend.endpoint, "https://project.example.co");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[backend]\nuser_id = \"u1\"\n").unwrap();

        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded.backend.user_id, "u1");
        assert_eq!(loaded.backend.bucket, "progress-photos");
    }
}
