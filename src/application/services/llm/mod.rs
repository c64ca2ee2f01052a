//! LLM contract layer - Prompts going out, normalized replies coming back

pub mod prompt_builder;
pub mod response_normalizer;

pub use response_normalizer::NormalizeError;
