//! Domain entities - Game world and player character

mod character;
mod scenario;

pub use character::{Character, StatBlock};
pub use scenario::{Npc, Scenario};
