//! Generation Service - Free-form text completion

use std::sync::Arc;

use crate::application::ports::outbound::{CompletionRequest, LlmError, LlmPort};

/// Service for plain text generation
pub struct GenerationService {
    llm: Arc<dyn LlmPort>,
}

impl GenerationService {
    pub fn new(llm: Arc<dyn LlmPort>) -> Self {
        Self { llm }
    }

    /// Send `prompt` as-is and return the model's text
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.llm.complete(CompletionRequest::new(prompt).as_text()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{MockLlm, ResponseFormat};

    #[tokio::test]
    async fn test_generate_requests_plain_text() {
        let llm = Arc::new(MockLlm::replying("Hello, adventurer."));
        let service = GenerationService::new(llm.clone());

        let text = service.generate("Say hello").await.unwrap();

        assert_eq!(text, "Hello, adventurer.");
        let request = &llm.requests()[0];
        assert_eq!(request.prompt, "Say hello");
        assert_eq!(request.response_format, ResponseFormat::Text);
        assert!(request.system_instruction.is_none());
    }
}
