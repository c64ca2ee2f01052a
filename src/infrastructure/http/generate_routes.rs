//! Text generation API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{GenerateRequestDto, GenerateResponseDto};
use crate::application::services::GenerationService;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Generate free-form text for a prompt
pub async fn generate(
    State(state): State<Arc<AppState>>,
    Json(req): Json<GenerateRequestDto>,
) -> Result<Json<GenerateResponseDto>, ApiError> {
    let service = GenerationService::new(state.llm.clone());
    let result = service.generate(&req.prompt).await?;

    Ok(Json(GenerateResponseDto {
        success: true,
        result,
    }))
}
