//! Scenario API routes

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::application::dto::{ScenarioRequestDto, ScenarioResponseDto};
use crate::application::services::ScenarioService;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::state::AppState;

/// Generate a new scenario from a theme
pub async fn generate_scenario(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ScenarioRequestDto>,
) -> Result<Json<ScenarioResponseDto>, ApiError> {
    let service = ScenarioService::new(state.llm.clone(), state.config.game_language.clone());
    let scenario = service.generate(&req.theme).await?;

    Ok(Json(ScenarioResponseDto {
        success: true,
        scenario,
    }))
}
