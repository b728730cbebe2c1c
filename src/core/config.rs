//! Application configuration loaded from a TOML file.
//!
//! Lookup order for the file:
//! 1. `--config <path>` (must exist)
//! 2. `CLASH_INVITER_CONFIG` environment variable (must exist)
//! 3. `~/.config/clash-inviter/config.toml` (optional, defaults when missing)
//!
//! The API token is read from `CLASH_API_TOKEN` first and from `[api].token`
//! second, so a token never has to be written to disk.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};

use crate::{
    clash::{
        http::{ClientConfig, CLASH_BASE_URL},
        types::{CandidateSearch, CandidateSource},
    },
    eligibility::FilterCriteria,
    ClashError, Result,
};

pub const TOKEN_ENV_VAR: &str = "CLASH_API_TOKEN";
pub const CONFIG_ENV_VAR: &str = "CLASH_INVITER_CONFIG";

/// Location id of the global player ranking.
pub const GLOBAL_LOCATION_ID: u32 = 32000006;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub criteria: FilterCriteria,
    pub session: SessionConfig,
    pub searches: Vec<CandidateSearch>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            criteria: FilterCriteria::default(),
            session: SessionConfig::default(),
            searches: vec![CandidateSearch {
                source: CandidateSource::LocationRanking {
                    location_id: GLOBAL_LOCATION_ID,
                },
                min_trophies: None,
                limit: Some(50),
            }],
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            token: None,
            base_url: CLASH_BASE_URL.to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Upper bound on passes over all searches.
    pub max_cycles: u32,
    /// Pause before the session starts so the emulator window can be focused.
    pub focus_delay_secs: u64,
    /// Pause after a 429 that carried no `Retry-After`.
    pub rate_limit_backoff_secs: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_cycles: 100,
            focus_delay_secs: 8,
            rate_limit_backoff_secs: 30,
        }
    }
}

impl SessionConfig {
    pub fn focus_delay(&self) -> Duration {
        Duration::from_secs(self.focus_delay_secs)
    }

    pub fn rate_limit_backoff(&self) -> Duration {
        Duration::from_secs(self.rate_limit_backoff_secs)
    }
}

/// Path: ~/.config/clash-inviter/config.toml
pub fn default_config_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("clash-inviter").join("config.toml")
}

/// Pick the config file and whether it has to exist.
pub fn resolve_config_path(explicit: Option<&Path>, env_value: Option<String>) -> (PathBuf, bool) {
    if let Some(path) = explicit {
        return (path.to_path_buf(), true);
    }
    match env_value.filter(|v| !v.trim().is_empty()) {
        Some(v) => (PathBuf::from(v), true),
        None => (default_config_path(), false),
    }
}

/// Pick the token: environment first, then the config file.
pub fn resolve_token(env_value: Option<String>, configured: Option<&str>) -> Result<String> {
    env_value
        .filter(|t| !t.trim().is_empty())
        .or_else(|| {
            configured
                .filter(|t| !t.trim().is_empty())
                .map(str::to_string)
        })
        .map(|t| t.trim().to_string())
        .ok_or_else(|| ClashError::MissingToken {
            env_var: TOKEN_ENV_VAR.to_string(),
        })
}

impl AppConfig {
    /// Load the configuration following the documented lookup order.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let (path, required) = resolve_config_path(explicit, std::env::var(CONFIG_ENV_VAR).ok());
        Self::load_from(&path, required)
    }

    pub fn load_from(path: &Path, required: bool) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(s) => {
                tracing::debug!("Loading config from {}", path.display());
                Self::from_toml_str(&s, path)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !required => {
                tracing::debug!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ClashError::Config {
                path: path.display().to_string(),
                message: e.to_string(),
            }),
        }
    }

    pub fn from_toml_str(s: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(s).map_err(|e| ClashError::Config {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        config.validate(path)?;
        Ok(config)
    }

    fn validate(&self, path: &Path) -> Result<()> {
        let invalid = |message: &str| ClashError::Config {
            path: path.display().to_string(),
            message: message.to_string(),
        };

        if self.api.base_url.trim().is_empty() {
            return Err(invalid("api.base_url must not be empty"));
        }
        if self.api.timeout_secs == 0 {
            return Err(invalid("api.timeout_secs must be greater than zero"));
        }
        if self.session.max_cycles == 0 {
            return Err(invalid("session.max_cycles must be greater than zero"));
        }
        if self.searches.is_empty() {
            return Err(invalid("at least one [[searches]] entry is required"));
        }
        Ok(())
    }

    /// Token from `CLASH_API_TOKEN` or `[api].token`.
    pub fn token(&self) -> Result<String> {
        resolve_token(std::env::var(TOKEN_ENV_VAR).ok(), self.api.token.as_deref())
    }

    pub fn client_config(&self) -> Result<ClientConfig> {
        Ok(ClientConfig {
            base_url: self.api.base_url.clone(),
            token: self.token()?,
            timeout: Duration::from_secs(self.api.timeout_secs),
        })
    }
}
