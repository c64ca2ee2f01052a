//! Application configuration

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use config::{builder::DefaultState, ConfigBuilder, Environment};
use serde::Deserialize;

/// Raw settings as read from the environment
#[derive(Debug, Clone, Deserialize)]
struct Settings {
    google_api_key: Option<String>,
    gemini_api_key: Option<String>,
    gemini_model: String,
    gemini_api_base: String,
    llm_timeout_secs: u64,
    server_host: String,
    server_port: u16,
    frontend_dir: String,
    cors_allowed_origins: String,
    game_language: String,
}

impl Settings {
    /// Build settings from `builder`, filling defaults for anything not set
    fn load(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .set_default("gemini_model", "gemini-2.0-flash-exp")?
            .set_default(
                "gemini_api_base",
                "https://generativelanguage.googleapis.com/v1beta",
            )?
            .set_default("llm_timeout_secs", 60)?
            .set_default("server_host", "0.0.0.0")?
            .set_default("server_port", 8000)?
            .set_default("frontend_dir", "frontend")?
            .set_default("cors_allowed_origins", "")?
            .set_default("game_language", "Korean")?
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The first non-empty API key, preferring `GOOGLE_API_KEY`
    fn api_key(&self) -> Option<String> {
        [&self.google_api_key, &self.gemini_api_key]
            .into_iter()
            .flatten()
            .map(|key| key.trim())
            .find(|key| !key.is_empty())
            .map(str::to_string)
    }
}

/// Application configuration loaded from environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Gemini API key
    pub api_key: String,
    /// Gemini model used for every completion
    pub gemini_model: String,
    /// Base URL of the generative-language API
    pub gemini_api_base: String,
    /// Upper bound on a single completion call
    pub llm_timeout_secs: u64,

    pub server_host: String,
    pub server_port: u16,

    /// Directory holding `index.html` and the static assets
    pub frontend_dir: PathBuf,
    /// Allowed CORS origins; empty allows any origin
    pub cors_allowed_origins: Vec<String>,

    /// Language the game master writes player-facing text in
    pub game_language: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Prompts for the API key on the terminal when neither `GOOGLE_API_KEY` nor
    /// `GEMINI_API_KEY` is set.
    pub fn from_env() -> Result<Self> {
        let settings = Settings::load(config::Config::builder().add_source(Environment::default()))?;
        let api_key = match settings.api_key() {
            Some(key) => key,
            None => prompt_api_key()?,
        };
        Self::from_settings(settings, api_key)
    }

    fn from_settings(settings: Settings, api_key: String) -> Result<Self> {
        let api_key = api_key.trim().to_string();
        if api_key.is_empty() {
            bail!("A Gemini API key is required (set GOOGLE_API_KEY or GEMINI_API_KEY)");
        }

        let cors_allowed_origins = settings
            .cors_allowed_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            api_key,
            gemini_model: settings.gemini_model,
            gemini_api_base: settings.gemini_api_base.trim_end_matches('/').to_string(),
            llm_timeout_secs: settings.llm_timeout_secs,
            server_host: settings.server_host,
            server_port: settings.server_port,
            frontend_dir: PathBuf::from(settings.frontend_dir),
            cors_allowed_origins,
            game_language: settings.game_language,
        })
    }

    /// Address the server binds to, as `host:port`
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn prompt_api_key() -> Result<String> {
    tracing::warn!("No GOOGLE_API_KEY or GEMINI_API_KEY set, asking on the terminal");
    dialoguer::Password::new()
        .with_prompt("Gemini API key")
        .allow_empty_password(true)
        .interact()
        .context("Failed to read the Gemini API key from the terminal")
}
