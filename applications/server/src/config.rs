/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use shelf_providers::ProviderConfig;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_auth")]
    pub auth: AuthSettings,

    #[serde(default = "default_providers")]
    pub providers: ProviderSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_database_url")]
    pub database_url: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub session_secret: String,

    /// The one email address allowed onto the import page
    #[serde(default)]
    pub allowed_email: String,

    #[serde(default = "default_session_expiration_hours")]
    pub session_expiration_hours: u64,

    #[serde(default = "default_sign_in_path")]
    pub sign_in_path: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProviderSettings {
    #[serde(default = "default_itunes_base_url")]
    pub itunes_base_url: String,

    #[serde(default = "default_deezer_base_url")]
    pub deezer_base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ProviderSettings {
    pub fn to_provider_config(&self) -> ProviderConfig {
        let defaults = ProviderConfig::default();
        ProviderConfig {
            itunes_base_url: self.itunes_base_url.clone(),
            deezer_base_url: self.deezer_base_url.clone(),
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
        }
    }
}

impl ServerConfig {
    /// Load configuration from file and environment
    ///
    /// Without an explicit path, `config.toml` in the working directory is
    /// used when present. Environment variables override file values, e.g.
    /// `SHELF_AUTH__SESSION_SECRET`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("SHELF")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.auth.session_secret.trim().is_empty() {
            return Err(ServerError::Config(
                "Session secret is required (set SHELF_AUTH__SESSION_SECRET)".to_string(),
            ));
        }

        if self.auth.allowed_email.trim().is_empty() {
            return Err(ServerError::Config(
                "Allowed email is required (set SHELF_AUTH__ALLOWED_EMAIL)".to_string(),
            ));
        }

        if !self.auth.sign_in_path.starts_with('/') {
            return Err(ServerError::Config(format!(
                "Sign-in path must be absolute, got {:?}",
                self.auth.sign_in_path
            )));
        }

        Ok(())
    }

    /// Filesystem path of the SQLite database, if the URL points at a file
    pub fn database_file(&self) -> Option<PathBuf> {
        let path = self
            .storage
            .database_url
            .strip_prefix("sqlite://")
            .or_else(|| self.storage.database_url.strip_prefix("sqlite:"))?;
        let path = path.split('?').next().unwrap_or(path);
        if path.is_empty() || path == ":memory:" {
            return None;
        }
        Some(PathBuf::from(path))
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        database_url: default_database_url(),
    }
}

fn default_database_url() -> String {
    "sqlite://./data/shelf.db".to_string()
}

fn default_auth() -> AuthSettings {
    AuthSettings {
        session_secret: String::new(),
        allowed_email: String::new(),
        session_expiration_hours: default_session_expiration_hours(),
        sign_in_path: default_sign_in_path(),
    }
}

fn default_session_expiration_hours() -> u64 {
    168
}

fn default_sign_in_path() -> String {
    "/api/auth/signin".to_string()
}

fn default_providers() -> ProviderSettings {
    ProviderSettings {
        itunes_base_url: default_itunes_base_url(),
        deezer_base_url: default_deezer_base_url(),
        timeout_secs: default_timeout_secs(),
        user_agent: None,
    }
}

fn default_itunes_base_url() -> String {
    ProviderConfig::default().itunes_base_url
}

fn default_deezer_base_url() -> String {
    ProviderConfig::default().deezer_base_url
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            auth: default_auth(),
            providers: default_providers(),
        }
    }
}
