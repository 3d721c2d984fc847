use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use landing_forge_core::Idea;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const PROMPT_REQUIRED: &str = "Prompt is required";

/// Idea creation and lookup routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/ideas", post(create_idea))
        .route("/ideas/{id}", get(find_idea))
}

/// Body of `POST /ideas`. Fields stay untyped so a wrong type is reported as
/// a missing prompt instead of a deserialization failure.
#[derive(Debug, Deserialize)]
struct CreateIdeaRequest {
    #[serde(default)]
    prompt: Option<Value>,
    #[serde(default)]
    model: Option<Value>,
}

async fn create_idea(
    State(state): State<AppState>,
    payload: Result<Json<CreateIdeaRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Idea>)> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected idea request body");
        ApiError::BadRequest(PROMPT_REQUIRED.to_string())
    })?;

    let prompt = match request.prompt {
        Some(Value::String(prompt)) if !prompt.trim().is_empty() => prompt,
        _ => return Err(ApiError::BadRequest(PROMPT_REQUIRED.to_string())),
    };
    let model = match &request.model {
        Some(Value::String(model)) => Some(model.as_str()),
        _ => None,
    };

    let idea = state.ideas().create(&prompt, model).await?;
    Ok((StatusCode::CREATED, Json(idea)))
}

async fn find_idea(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Json<Idea>> {
    Ok(Json(state.ideas().find_one(&id).await?))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
        Router,
    };
    use landing_forge_core::generation::{ModelClient, ProviderError};
    use landing_forge_core::store::MemoryIdeaStore;
    use landing_forge_core::{IdeaId, IdeaService, StoredIdea};
    use serde_json::json;
    use tower::ServiceExt;

    use super::*;
    use crate::config::AppConfig;
    use crate::routes::build_router;

    const FULL_RESPONSE: &str = "  Here you go:\n{\"hero\":{\"title\":\"T\",\"subtitle\":\"S\",\"cta\":\"Go\"},\"about\":{\"heading\":\"A\",\"text\":\"...\"},\"contact\":{\"heading\":\"C\",\"email\":\"e@x.com\",\"phone\":\"1\",\"address\":\"addr\"}}\n";

    struct CannedModel(&'static str);

    #[async_trait]
    impl ModelClient for CannedModel {
        async fn generate(&self, _: &str, _: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    fn app(reply: &'static str, store: &MemoryIdeaStore) -> Router {
        let config = AppConfig::from_lookup(|name| {
            (name == "OPENROUTER_API_KEY").then(|| "sk-test".to_string())
        })
        .unwrap();
        let ideas = IdeaService::new(
            Arc::new(CannedModel(reply)),
            Arc::new(store.clone()),
            config.default_model.clone(),
        );
        build_router(AppState::new(ideas, config))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::post("/ideas")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn create_returns_canonical_idea() {
        let store = MemoryIdeaStore::new();
        let (status, body) = send(app(FULL_RESPONSE, &store), post_json(r#"{"prompt":"a bakery"}"#)).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["prompt"], "a bakery");
        assert!(body["id"].is_string());
        assert!(body["createdAt"].is_string());
        assert_eq!(
            body["sections"],
            json!([
                {"type": "hero", "title": "T", "subtitle": "S", "cta": "Go"},
                {"type": "about", "heading": "A", "text": "..."},
                {"type": "contact", "heading": "C", "email": "e@x.com", "phone": "1", "address": "addr"}
            ])
        );
    }

    #[tokio::test]
    async fn missing_or_non_string_prompt_is_bad_request() {
        for body in [r#"{}"#, r#"{"prompt": 42}"#, r#"{"prompt": "  "}"#, "not json"] {
            let store = MemoryIdeaStore::new();
            let (status, json) = send(app(FULL_RESPONSE, &store), post_json(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "body: {body}");
            assert_eq!(json["error"]["message"], "Prompt is required");
            assert_eq!(json["error"]["statusCode"], 400);
        }
    }

    #[tokio::test]
    async fn generation_failure_is_server_error_with_reason() {
        let store = MemoryIdeaStore::new();
        let (status, body) = send(app("no json here", &store), post_json(r#"{"prompt":"a bakery"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"]["type"], "generationFailed");
        assert_eq!(
            body["error"]["message"],
            "AI generation or parsing failed: no JSON object found in AI response"
        );
    }

    #[tokio::test]
    async fn missing_section_is_server_error() {
        let store = MemoryIdeaStore::new();
        let reply = r#"{"hero":{"title":"T"},"about":{"text":"A"}}"#;
        let (status, body) = send(app(reply, &store), post_json(r#"{"prompt":"a bakery"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"]["message"].as_str().unwrap().ends_with("contact"));
    }

    #[tokio::test]
    async fn get_repairs_legacy_sections() {
        let store = MemoryIdeaStore::new();
        let id = IdeaId::generate();
        store
            .insert(StoredIdea {
                id,
                prompt: "old".to_string(),
                sections: json!({"hero": {"title": "T"}, "about": {"heading": "A"}}),
                created_at: chrono::Utc::now(),
            })
            .await;

        let request = Request::get(format!("/ideas/{id}")).body(Body::empty()).unwrap();
        let (status, body) = send(app("", &store), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["sections"],
            json!([{"type": "hero", "title": "T"}, {"type": "about", "heading": "A"}])
        );
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found() {
        let store = MemoryIdeaStore::new();
        for id in [IdeaId::generate().to_string(), "garbage".to_string()] {
            let request = Request::get(format!("/ideas/{id}")).body(Body::empty()).unwrap();
            let (status, body) = send(app("", &store), request).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(body["error"]["message"], "Idea not found");
        }
    }

    #[tokio::test]
    async fn health_reports_store_backend() {
        let store = MemoryIdeaStore::new();
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app("", &store), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["store"], "memory");
    }
}
