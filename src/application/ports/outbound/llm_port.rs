//! LLM port - Interface for text completion

use async_trait::async_trait;

/// Sampling temperature used unless a caller asks for something else
pub const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Shape the reply should take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseFormat {
    /// Free-form text
    Text,
    /// A reply constrained to the `application/json` media type
    #[default]
    Json,
}

/// A single completion request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The user turn sent to the model
    pub prompt: String,
    /// Standing instruction for the model (schema, tone, rules)
    pub system_instruction: Option<String>,
    pub response_format: ResponseFormat,
    pub temperature: f32,
}

impl CompletionRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_instruction: None,
            response_format: ResponseFormat::default(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }

    pub fn with_system_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    pub fn with_response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = format;
        self
    }

    /// Ask for free text instead of JSON
    pub fn as_text(self) -> Self {
        self.with_response_format(ResponseFormat::Text)
    }
}

/// Failure talking to the completion backend
///
/// Transport errors, quota rejections and malformed payloads are deliberately not
/// told apart; callers only need the cause for display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LlmError {
    #[error("Upstream generation failed: {0}")]
    GenerationFailed(String),
}

impl LlmError {
    pub fn generation_failed(cause: impl ToString) -> Self {
        Self::GenerationFailed(cause.to_string())
    }

    /// The underlying cause, without the prefix
    pub fn reason(&self) -> &str {
        match self {
            Self::GenerationFailed(cause) => cause,
        }
    }
}

/// Port for text completion against a generative-language backend
#[async_trait]
pub trait LlmPort: Send + Sync {
    /// Run one completion and return the raw reply text
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError>;

    /// Name of the model serving completions, for diagnostics
    fn model_name(&self) -> &str;
}

/// Scripted LLM for tests
///
/// Answers every request with the same reply and records what it was asked.
#[cfg(test)]
#[derive(Debug)]
pub struct MockLlm {
    reply: Result<String, LlmError>,
    requests: std::sync::Mutex<Vec<CompletionRequest>>,
}

#[cfg(test)]
impl MockLlm {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            reply: Ok(text.into()),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn failing(cause: impl Into<String>) -> Self {
        Self {
            reply: Err(LlmError::GenerationFailed(cause.into())),
            requests: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl LlmPort for MockLlm {
    async fn complete(&self, request: CompletionRequest) -> Result<String, LlmError> {
        self.requests.lock().unwrap().push(request);
        self.reply.clone()
    }

    fn model_name(&self) -> &str {
        "mock"
    }
}
