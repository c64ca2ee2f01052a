//! Outbound ports - Interfaces that the application requires from external systems

mod llm_port;
mod random_port;

pub use llm_port::{CompletionRequest, LlmError, LlmPort, ResponseFormat};
pub use random_port::RandomPort;

#[cfg(test)]
pub use llm_port::{MockLlm, DEFAULT_TEMPERATURE};
#[cfg(test)]
pub use random_port::FixedRandomPort;
