use serde::{Deserialize, Serialize};

use crate::domain::entities::Scenario;

/// Request to generate a new scenario
#[derive(Debug, Clone, Deserialize)]
pub struct ScenarioRequestDto {
    pub theme: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioResponseDto {
    pub success: bool,
    pub scenario: Scenario,
}
