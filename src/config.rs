use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the remote repository API.
///
/// `api_base` addresses the repository's API root (for a GitHub-style host,
/// `https://api.example.com/repos/{owner}/{repo}`). `owner` and `repo` are
/// the repository coordinates, kept for diagnostic context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub api_base: String,
    pub owner: String,
    pub repo: String,
    pub timeout: Duration,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            owner: String::new(),
            repo: String::new(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl RemoteConfig {
    pub fn new(
        api_base: impl Into<String>,
        owner: impl Into<String>,
        repo: impl Into<String>,
    ) -> Self {
        Self {
            api_base: api_base.into(),
            owner: owner.into(),
            repo: repo.into(),
            ..Self::default()
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.api_base.is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        if !self.api_base.starts_with("http://") && !self.api_base.starts_with("https://") {
            return Err("API base URL must start with http:// or https://".to_string());
        }

        if self.owner.is_empty() {
            return Err("Repository owner cannot be empty".to_string());
        }

        if self.repo.is_empty() {
            return Err("Repository name cannot be empty".to_string());
        }

        if self.timeout.is_zero() {
            return Err("Timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
