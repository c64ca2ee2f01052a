use serde::{Deserialize, Serialize};

/// Request for free-form text generation
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequestDto {
    pub prompt: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateResponseDto {
    pub success: bool,
    pub result: String,
}
