//! Data Transfer Objects - For API boundaries
//!
//! Request bodies are decoded straight into these types; a body that does not fit
//! is rejected by the extractor before any handler code runs.

pub mod game;
pub mod generate;
pub mod image;
pub mod scenario;

pub use game::*;
pub use generate::*;
pub use image::*;
pub use scenario::*;
