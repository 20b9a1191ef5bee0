use config::{ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::{
    error::{Result, TutorankError},
    youtube::DEFAULT_API_BASE_URL,
};

pub const API_KEY_ENV_VAR: &str = "YOUTUBE_API_KEY";

/// Environment variables read by [`Settings::load`] and the setting each one fills.
/// Nothing else in the process environment is consulted.
pub const ENV_KEYS: &[(&str, &str)] = &[
    (API_KEY_ENV_VAR, "youtube_api_key"),
    ("PORT", "port"),
    ("TUTORANK_HOST", "host"),
    ("TUTORANK_API_BASE_URL", "api_base_url"),
    ("TUTORANK_STATIC_DIR", "static_dir"),
];

/// Runtime settings shared by the server and the CLI.
///
/// Loaded from an optional `tutorank.toml`, overridden by the variables in [`ENV_KEYS`].
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// YouTube Data API key
    #[serde(default)]
    pub youtube_api_key: String,

    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Overridable so tests can point the client at a mock server
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Directory served as static files by the HTTP server
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_static_dir() -> String {
    "public".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            youtube_api_key: String::new(),
            host: default_host(),
            port: default_port(),
            api_base_url: default_api_base_url(),
            static_dir: default_static_dir(),
        }
    }
}

impl Settings {
    /// Load settings from `.env`, `tutorank.toml` and the environment.
    pub fn load() -> Result<Self> {
        // A missing .env file is fine, the variables may come from the shell
        let _ = dotenvy::dotenv();

        let builder = config::Config::builder()
            .add_source(config::File::with_name("tutorank").required(false));
        let settings = with_env_overrides(builder, |var| std::env::var(var).ok())?.build()?;

        Self::from_config(settings)
    }

    pub fn from_config(settings: config::Config) -> Result<Self> {
        Ok(settings.try_deserialize()?)
    }
}

/// Apply the documented environment variables on top of `builder`.
fn with_env_overrides<F>(
    mut builder: ConfigBuilder<DefaultState>,
    lookup: F,
) -> Result<ConfigBuilder<DefaultState>>
where
    F: Fn(&str) -> Option<String>,
{
    for (var, key) in ENV_KEYS {
        builder = builder.set_override_option(*key, lookup(var))?;
    }
    Ok(builder)
}

impl Settings {
    /// Validate that the API key is set
    pub fn validate_api_key(&self) -> Result<&str> {
        let key = self.youtube_api_key.trim();
        if key.is_empty() {
            return Err(TutorankError::MissingApiKey {
                env_var: API_KEY_ENV_VAR.to_string(),
            });
        }
        Ok(key)
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
