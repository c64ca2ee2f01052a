//! Frontend routes - Index page and static assets

use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::path::Path;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::infrastructure::state::AppState;

/// Routes for `/` and, when the frontend directory exists, `/static`
pub fn frontend_routes(frontend_dir: &Path) -> Router<Arc<AppState>> {
    let router = Router::new().route("/", get(index));

    if frontend_dir.is_dir() {
        tracing::info!("Serving static files from {}", frontend_dir.display());
        router.nest_service("/static", ServeDir::new(frontend_dir))
    } else {
        tracing::info!(
            "Frontend directory {} not found, static files disabled",
            frontend_dir.display()
        );
        router
    }
}

/// Serve `index.html`, or a status document when there is no frontend
pub async fn index(State(state): State<Arc<AppState>>) -> Response {
    let index_path = state.config.frontend_dir.join("index.html");

    match tokio::fs::read_to_string(&index_path).await {
        Ok(page) => Html(page).into_response(),
        Err(_) => Json(json!({
            "status": "ok",
            "message": "AI TRPG Server is running.",
            "model": state.llm.model_name()
        }))
        .into_response(),
    }
}
