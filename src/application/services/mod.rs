//! Application services - Use case implementations
//!
//! Each service wraps one use case of the HTTP API. Services that talk to the
//! model hold the shared `LlmPort` handle and are cheap to build per request.

pub mod dice_service;
pub mod game_master_service;
pub mod generation_service;
pub mod image_prompt_service;
pub mod llm;
pub mod scenario_service;

pub use dice_service::DiceService;
pub use game_master_service::{GameMasterError, GameMasterService};
pub use generation_service::GenerationService;
pub use image_prompt_service::ImagePromptService;
pub use scenario_service::{ScenarioError, ScenarioService};
