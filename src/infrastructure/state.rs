//! Shared application state

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::outbound::{LlmPort, RandomPort};
use crate::infrastructure::config::AppConfig;
use crate::infrastructure::gemini::GeminiClient;
use crate::infrastructure::random::ThreadRngAdapter;

/// Shared application state
///
/// Immutable after startup; handlers build their services from the shared ports.
pub struct AppState {
    pub config: AppConfig,
    pub llm: Arc<dyn LlmPort>,
    pub rng: Arc<dyn RandomPort>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Result<Self> {
        let llm = GeminiClient::new(
            &config.gemini_api_base,
            config.api_key.clone(),
            config.gemini_model.clone(),
            Duration::from_secs(config.llm_timeout_secs),
        )?;

        Ok(Self::with_ports(config, Arc::new(llm), Arc::new(ThreadRngAdapter::new())))
    }

    pub fn with_ports(config: AppConfig, llm: Arc<dyn LlmPort>, rng: Arc<dyn RandomPort>) -> Self {
        Self { config, llm, rng }
    }
}

#[cfg(test)]
impl AppState {
    /// State with test doubles and a configuration that needs no environment
    pub fn for_tests(llm: Arc<dyn LlmPort>, rng: Arc<dyn RandomPort>) -> Self {
        let config = AppConfig {
            api_key: "test-key".to_string(),
            gemini_model: "mock".to_string(),
            gemini_api_base: "http://127.0.0.1:1".to_string(),
            llm_timeout_secs: 1,
            server_host: "127.0.0.1".to_string(),
            server_port: 0,
            frontend_dir: std::path::PathBuf::from("no-such-frontend-dir"),
            cors_allowed_origins: Vec::new(),
            game_language: "English".to_string(),
        };
        Self::with_ports(config, llm, rng)
    }
}
