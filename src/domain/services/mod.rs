//! Domain services - Pure game rules

pub mod dice;

pub use dice::{resolve_check, D20_SIDES};
