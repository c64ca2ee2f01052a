//! Application layer - Use cases between the HTTP surface and the domain
//!
//! This layer contains:
//! - Ports: Interfaces to the completion backend and the random source
//! - DTOs: Request and response bodies of the HTTP API
//! - Services: Prompt assembly, reply normalization and the game use cases

pub mod dto;
pub mod ports;
pub mod services;
