//! HTTP REST API routes

mod diagnostic_routes;
mod error;
mod frontend_routes;
mod game_routes;
mod generate_routes;
mod image_routes;
mod scenario_routes;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::infrastructure::state::AppState;

pub use frontend_routes::frontend_routes;

/// Create all API routes
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health_check))
        // Generation routes
        .route("/api/generate", post(generate_routes::generate))
        .route(
            "/api/scenario/generate",
            post(scenario_routes::generate_scenario),
        )
        // Game routes
        .route("/api/game/action", post(game_routes::game_action))
        .route("/api/game/roll", post(game_routes::roll_dice))
        .route("/api/game/roll-result", post(game_routes::roll_result))
        // Image prompt routes
        .route(
            "/api/image/enhance-prompt",
            post(image_routes::enhance_prompt),
        )
        .route(
            "/api/image/generate-prompt",
            post(image_routes::generate_image_prompt),
        )
        // Diagnostic routes
        .route("/api/test/health", get(diagnostic_routes::test_health))
        .route("/api/test/gemini", get(diagnostic_routes::test_gemini))
        .route("/api/test/scenario", get(diagnostic_routes::test_scenario))
        .route("/api/test/action", get(diagnostic_routes::test_action))
        .route("/api/test/roll", get(diagnostic_routes::test_roll))
        .route("/api/test/all", get(diagnostic_routes::test_all))
}

async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::outbound::{FixedRandomPort, LlmPort, MockLlm, RandomPort};
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app(llm: Arc<dyn LlmPort>, rng: Arc<dyn RandomPort>) -> Router {
        let state = AppState::for_tests(llm, rng);
        let frontend = frontend_routes(&state.config.frontend_dir);
        create_routes()
            .merge(frontend)
            .with_state(Arc::new(state))
    }

    fn replying(text: &str) -> Router {
        app(Arc::new(MockLlm::replying(text)), Arc::new(FixedRandomPort::constant(10)))
    }

    fn failing() -> Router {
        app(
            Arc::new(MockLlm::failing("connection refused")),
            Arc::new(FixedRandomPort::constant(10)),
        )
    }

    async fn send(router: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn action_body() -> Value {
        json!({
            "scenario": {"title": "Test Dungeon", "setting": "A dark dungeon"},
            "character": {"name": "Hero", "class": "Warrior", "stats": {"hp": 80, "maxHp": 100}},
            "history": [{"role": "gm", "text": "You stand at the gate."}],
            "action": "I open the gate"
        })
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = replying("")
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"OK");
    }

    #[tokio::test]
    async fn test_generate_returns_text() {
        let (status, body) = send(
            replying("Once upon a time"),
            Method::POST,
            "/api/generate",
            Some(json!({"prompt": "Tell a story"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"success": true, "result": "Once upon a time"}));
    }

    #[tokio::test]
    async fn test_generate_failure_is_500() {
        let (status, body) = send(
            failing(),
            Method::POST,
            "/api/generate",
            Some(json!({"prompt": "Tell a story"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["reason"], "connection refused");
        assert!(body.get("raw_response").is_none());
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let (status, _) = send(
            replying("unused"),
            Method::POST,
            "/api/generate",
            Some(json!({"text": "wrong field"})),
        )
        .await;
        assert!(status.is_client_error());
    }

    #[tokio::test]
    async fn test_scenario_parse_failure_carries_raw_reply() {
        let (status, body) = send(
            replying("Sorry, I can't do JSON"),
            Method::POST,
            "/api/scenario/generate",
            Some(json!({"theme": "pirates"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
        assert_eq!(body["raw_response"], "Sorry, I can't do JSON");
    }

    #[tokio::test]
    async fn test_scenario_success() {
        let (status, body) = send(
            replying(r#"{"title":"Black Sails","npcs":[{"name":"Anne","role":"Captain"}]}"#),
            Method::POST,
            "/api/scenario/generate",
            Some(json!({"theme": "pirates"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["scenario"]["title"], "Black Sails");
        assert_eq!(body["scenario"]["npcs"][0]["name"], "Anne");
    }

    #[tokio::test]
    async fn test_scenario_array_reply_is_kept_under_items() {
        let (status, body) = send(
            replying(r#"[{"title":"Black Sails"}]"#),
            Method::POST,
            "/api/scenario/generate",
            Some(json!({"theme": "pirates"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert!(body["scenario"]["items"][0]
            .as_str()
            .unwrap()
            .contains("Black Sails"));
    }

    #[tokio::test]
    async fn test_scenario_location_objects_become_names() {
        let (status, body) = send(
            replying(r#"{"title":"X","locations":[{"name":"Gate"}],"threats":"Kraken"}"#),
            Method::POST,
            "/api/scenario/generate",
            Some(json!({"theme": "pirates"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["scenario"]["title"], "X");
        assert_eq!(body["scenario"]["locations"], json!(["Gate"]));
        assert_eq!(body["scenario"]["threats"], json!(["Kraken"]));
    }

    #[tokio::test]
    async fn test_action_defaults_missing_dialogues() {
        let (status, body) = send(
            replying(r#"{"narration":"The gate creaks open.","requires_roll":false}"#),
            Method::POST,
            "/api/game/action",
            Some(action_body()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"]["narration"], "The gate creaks open.");
        assert_eq!(body["result"]["dialogues"], json!([]));
    }

    #[tokio::test]
    async fn test_action_falls_back_on_upstream_failure() {
        let (status, body) = send(failing(), Method::POST, "/api/game/action", Some(action_body())).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"]["dialogues"], json!([]));
        assert_eq!(body["result"]["danger_level"], "safe");
        assert_eq!(body["result"]["requires_roll"], false);
        assert!(!body["result"]["narration"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_action_falls_back_on_unparseable_reply() {
        let (status, body) = send(
            replying("not json at all"),
            Method::POST,
            "/api/game/action",
            Some(action_body()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["danger_level"], "safe");
    }

    #[tokio::test]
    async fn test_action_accepts_bare_dialogue_and_single_item() {
        let (status, body) = send(
            replying(
                r#"{"narration":"The vault opens.","dialogues":["Halt!"],"items_gained":"sword","danger_level":"danger"}"#,
            ),
            Method::POST,
            "/api/game/action",
            Some(action_body()),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["narration"], "The vault opens.");
        assert_eq!(body["result"]["danger_level"], "danger");
        assert_eq!(body["result"]["dialogues"][0]["speaker"], "");
        assert_eq!(body["result"]["dialogues"][0]["text"], "Halt!");
        assert_eq!(body["result"]["items_gained"], json!(["sword"]));
    }

    #[tokio::test]
    async fn test_roll_uses_defaults_and_injected_die() {
        let router = app(
            Arc::new(MockLlm::replying("")),
            Arc::new(FixedRandomPort::constant(20)),
        );
        let (status, body) = send(router, Method::POST, "/api/game/roll", Some(json!({}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "success": true,
                "roll": 20,
                "bonus": 0,
                "total": 20,
                "difficulty": 12,
                "is_success": true,
                "is_critical": true,
                "is_fumble": false
            })
        );
    }

    #[tokio::test]
    async fn test_roll_result_falls_back() {
        let (status, body) = send(
            failing(),
            Method::POST,
            "/api/game/roll-result",
            Some(json!({
                "scenario": {},
                "character": {"name": "Hero", "class": "Warrior"},
                "action": "jump the gap",
                "roll_result": {"roll": 3, "bonus": 1, "total": 4, "difficulty": 12}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["result"]["damage_taken"], 0);
        assert_eq!(body["result"]["items_gained"], json!([]));
        assert_eq!(body["result"]["danger_level"], "safe");
    }

    #[tokio::test]
    async fn test_roll_result_accepts_single_item() {
        let (status, body) = send(
            replying(r#"{"narration":"You land safely.","items_gained":"sword","danger_level":"caution"}"#),
            Method::POST,
            "/api/game/roll-result",
            Some(json!({
                "scenario": {"title": "Test Dungeon"},
                "character": {"name": "Hero", "class": "Warrior"},
                "action": "jump the gap",
                "roll_result": {"roll": 17, "bonus": 0, "total": 17, "difficulty": 12, "is_success": true}
            })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["result"]["narration"], "You land safely.");
        assert_eq!(body["result"]["items_gained"], json!(["sword"]));
        assert_eq!(body["result"]["danger_level"], "caution");
    }

    #[tokio::test]
    async fn test_enhance_prompt_falls_back_to_original() {
        let (status, body) = send(
            failing(),
            Method::POST,
            "/api/image/enhance-prompt",
            Some(json!({"prompt": "a castle at dusk"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["enhanced_prompt"], "a castle at dusk");
        assert!(body["error"].as_str().unwrap().contains("connection refused"));
    }

    #[tokio::test]
    async fn test_enhance_prompt_success() {
        let (_, body) = send(
            replying("  a gothic castle at dusk, oil painting  "),
            Method::POST,
            "/api/image/enhance-prompt",
            Some(json!({"prompt": "a castle at dusk", "theme": null})),
        )
        .await;
        assert_eq!(
            body,
            json!({"success": true, "enhanced_prompt": "a gothic castle at dusk, oil painting"})
        );
    }

    #[tokio::test]
    async fn test_generate_image_prompt_failure_is_500() {
        let (status, body) = send(
            failing(),
            Method::POST,
            "/api/image/generate-prompt",
            Some(json!({"scene": "A flooded crypt"})),
        )
        .await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_index_without_frontend_reports_status() {
        let (status, body) = send(replying(""), Method::GET, "/", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["model"], "mock");
    }

    #[tokio::test]
    async fn test_diagnostic_health_lists_endpoints() {
        let (_, body) = send(replying(""), Method::GET, "/api/test/health", None).await;
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["endpoints"]["roll_result"], "/api/game/roll-result");
    }

    #[tokio::test]
    async fn test_diagnostic_gemini_failure() {
        let (status, body) = send(failing(), Method::GET, "/api/test/gemini", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["api_key_configured"], false);
    }

    #[tokio::test]
    async fn test_diagnostic_roll() {
        let (_, body) = send(replying(""), Method::GET, "/api/test/roll", None).await;
        // Fixed die of 10 with stat 14: 10 + 2 = 12 against 12
        assert_eq!(body["total"], 12);
        assert_eq!(body["is_success"], true);
        assert_eq!(body["interpretation"], "Success!");
        assert_eq!(body["test_params"], json!({"stat_value": 14, "difficulty": 12}));
    }

    #[tokio::test]
    async fn test_diagnostic_action_includes_test_data() {
        let (_, body) = send(
            replying(r#"{"narration":"Dust swirls."}"#),
            Method::GET,
            "/api/test/action",
            None,
        )
        .await;
        assert_eq!(body["result"]["narration"], "Dust swirls.");
        assert_eq!(body["test_data"]["character"]["stats"]["maxHp"], 100);
    }

    #[tokio::test]
    async fn test_diagnostic_all_reports_gemini_failure() {
        let (_, body) = send(failing(), Method::GET, "/api/test/all", None).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["results"]["gemini"]["status"], "error");
        assert_eq!(body["results"]["roll"]["status"], "ok");
        assert!(body["timestamp"].is_string());
    }
}
