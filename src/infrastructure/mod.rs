//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Gemini: completion client for the generative-language API
//! - Random: thread-local RNG behind the dice port
//! - HTTP: REST API routes and static frontend
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod gemini;
pub mod http;
pub mod random;
pub mod state;
