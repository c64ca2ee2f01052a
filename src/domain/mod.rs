//! Domain layer - Core game concepts with no I/O
//!
//! This layer contains:
//! - Entities: Scenario and Character, owned by the caller and resent every turn
//! - Value Objects: History entries, game events and roll outcomes
//! - Domain Services: Pure rules such as the d20 check

pub mod entities;
pub mod services;
pub mod value_objects;
