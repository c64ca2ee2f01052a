//! Scenario Service - Generates the game world for a new session

use std::sync::Arc;

use crate::application::ports::outbound::{CompletionRequest, LlmError, LlmPort};
use crate::application::services::llm::{prompt_builder, response_normalizer, NormalizeError};
use crate::domain::entities::Scenario;

/// Error type for scenario generation
#[derive(Debug, thiserror::Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Upstream(#[from] LlmError),
    #[error(transparent)]
    Reply(#[from] NormalizeError),
}

/// Service for generating scenarios
///
/// There is no fallback: a scenario is the foundation of a game and cannot be
/// faked, so every failure reaches the caller.
pub struct ScenarioService {
    llm: Arc<dyn LlmPort>,
    language: String,
}

impl ScenarioService {
    pub fn new(llm: Arc<dyn LlmPort>, language: impl Into<String>) -> Self {
        Self {
            llm,
            language: language.into(),
        }
    }

    /// Generate a scenario around `theme`
    pub async fn generate(&self, theme: &str) -> Result<Scenario, ScenarioError> {
        let completion = CompletionRequest::new(prompt_builder::scenario_prompt(theme))
            .with_system_instruction(prompt_builder::scenario_instruction(&self.language));

        let reply = self.llm.complete(completion).await?;
        let map = response_normalizer::normalize(&reply)?;
        let scenario: Scenario = response_normalizer::decode(&reply, map)?;

        tracing::info!(
            title = %scenario.title,
            npcs = scenario.npcs.len(),
            "Generated scenario"
        );

        Ok(scenario)
    }
}
