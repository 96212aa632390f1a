//! Client configuration
//!
//! Server URL and cached credentials, stored as JSON in the per-user config
//! directory. The `WORDLE_API_URL` environment variable overrides the
//! configured server.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Persisted client settings and cached login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            username: None,
            token: None,
            api_url: default_api_url(),
        }
    }
}

impl ClientConfig {
    /// Load the config file, falling back to defaults if absent or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(Self::config_path())
    }

    fn load_from(path: Option<PathBuf>) -> Self {
        let config = path
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|content| serde_json::from_str(&content).ok())
            .unwrap_or_default();
        Self::with_env_override(config)
    }

    fn with_env_override(mut config: Self) -> Self {
        if let Ok(url) = std::env::var("WORDLE_API_URL")
            && !url.is_empty()
        {
            config.api_url = url;
        }
        config
    }

    /// Persist the current settings
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path().context("No config directory available")?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(&path, content)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Record a successful login
    ///
    /// # Errors
    /// Returns an error if the config file cannot be written.
    pub fn store_login(&mut self, username: &str, token: &str) -> Result<()> {
        self.username = Some(username.to_string());
        self.token = Some(token.to_string());
        self.save()
    }

    /// Forget cached credentials
    ///
    /// # Errors
    /// Returns an error if the config file cannot be written.
    pub fn clear_login(&mut self) -> Result<()> {
        self.username = None;
        self.token = None;
        self.save()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "wordle-daily")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }
}
