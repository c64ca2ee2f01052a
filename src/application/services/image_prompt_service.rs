//! Image Prompt Service - Prompts for an external image generator

use std::sync::Arc;

use crate::application::ports::outbound::{CompletionRequest, LlmError, LlmPort};
use crate::application::services::llm::prompt_builder;
use crate::domain::entities::Scenario;

/// Service for writing image generation prompts
pub struct ImagePromptService {
    llm: Arc<dyn LlmPort>,
}

impl ImagePromptService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Turn a rough description into a detailed, artistic prompt
    pub async fn enhance(&self, prompt: &str, theme: &str) -> Result<String, LlmError> {
        let completion = CompletionRequest::new(prompt_builder::enhance_image_prompt(prompt, theme))
            .with_system_instruction(prompt_builder::enhance_image_instruction())
            .as_text();

        let reply = self.llm.complete(completion).await?;
        Ok(reply.trim().to_string())
    }

    /// Write an image prompt for a scene, using the scenario for setting and theme
    pub async fn from_scene(
        &self,
        scene: &str,
        scenario: Option<&Scenario>,
    ) -> Result<String, LlmError> {
        let completion = CompletionRequest::new(prompt_builder::scene_image_prompt(scene, scenario))
            .with_system_instruction(prompt_builder::scene_image_instruction())
            .as_text();

        let reply = self.llm.complete(completion).await?;
        Ok(reply.trim().to_string())
    }
}
