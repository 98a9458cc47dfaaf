//! Router construction.
//!
//! Builds the axum router with all routes and middleware.

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware::security;
use crate::state::AppState;

/// Create the application router.
///
/// # Arguments
///
/// * `state` - Shared application state
pub(crate) fn create_router(state: Arc<AppState>) -> Router {
    // API routes: one per user-facing wiki action
    let api_routes = Router::new()
        .route(
            "/api/entries",
            get(handlers::entries::list_entries).post(handlers::entries::create_entry),
        )
        .route(
            "/api/entries/{title}",
            get(handlers::entries::get_entry).put(handlers::entries::update_entry),
        )
        .route(
            "/api/entries/{title}/raw",
            get(handlers::entries::get_raw_entry),
        )
        .route("/api/random", get(handlers::entries::random_entry))
        .route("/api/search", get(handlers::search::search));

    // Add security headers middleware
    Router::new()
        .merge(api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(security::csp_layer())
                .layer(security::content_type_options_layer())
                .layer(security::frame_options_layer()),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;
    use wiki_core::Wiki;
    use wiki_renderer::HtmlRenderer;
    use wiki_storage::MockEntryStore;

    use super::*;

    fn router_with(store: MockEntryStore) -> Router {
        let state = Arc::new(AppState {
            wiki: Wiki::new(Arc::new(store), HtmlRenderer::new()),
        });
        create_router(state)
    }

    fn sample_router() -> Router {
        router_with(
            MockEntryStore::new()
                .with_entry("Python", "# Python\nA language.")
                .with_entry("Rust", "# Rust\nAnother language."),
        )
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn get_request(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn json_request(method: &str, uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_owned()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_list_entries() {
        let response = sample_router()
            .oneshot(get_request("/api/entries"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["entries"], serde_json::json!(["Python", "Rust"]));
    }

    #[tokio::test]
    async fn test_get_entry_renders_html() {
        let response = sample_router()
            .oneshot(get_request("/api/entries/Python"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["title"], "Python");
        assert!(
            json["content"]
                .as_str()
                .unwrap()
                .contains("<h1>Python</h1>")
        );
    }

    #[tokio::test]
    async fn test_get_missing_entry_is_404() {
        let response = sample_router()
            .oneshot(get_request("/api/entries/Haskell"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert!(json["error"].as_str().unwrap().contains("Haskell"));
    }

    #[tokio::test]
    async fn test_get_raw_entry() {
        let response = sample_router()
            .oneshot(get_request("/api/entries/Rust/raw"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["markup"], "# Rust\nAnother language.");
    }

    #[tokio::test]
    async fn test_create_entry() {
        let response = sample_router()
            .oneshot(json_request(
                "POST",
                "/api/entries",
                r##"{"title": "Go", "content": "# Go\nCompiled."}"##,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        let json = body_json(response).await;
        assert_eq!(json["title"], "Go");
        assert!(json["content"].as_str().unwrap().contains("<h1>Go</h1>"));
    }

    #[tokio::test]
    async fn test_create_existing_entry_is_409() {
        let response = sample_router()
            .oneshot(json_request(
                "POST",
                "/api/entries",
                r#"{"title": "Python", "content": "overwrite attempt"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_invalid_title_is_400() {
        let response = sample_router()
            .oneshot(json_request(
                "POST",
                "/api/entries",
                r#"{"title": "", "content": "body"}"#,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_entry_overwrites() {
        let response = sample_router()
            .oneshot(json_request(
                "PUT",
                "/api/entries/Rust",
                r##"{"content": "# Rust\nRewritten."}"##,
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert!(json["content"].as_str().unwrap().contains("Rewritten."));
    }

    #[tokio::test]
    async fn test_random_entry_on_empty_wiki_is_404() {
        let response = router_with(MockEntryStore::new())
            .oneshot(get_request("/api/random"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_search_exact_hit() {
        let response = sample_router()
            .oneshot(get_request("/api/search?q=Python"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["entry"]["title"], "Python");
    }

    #[tokio::test]
    async fn test_search_substring_matches() {
        let response = sample_router()
            .oneshot(get_request("/api/search?q=pyth"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["query"], "pyth");
        assert_eq!(json["matches"], serde_json::json!(["Python"]));
    }

    #[tokio::test]
    async fn test_search_without_query_lists_everything() {
        let response = sample_router()
            .oneshot(get_request("/api/search"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["matches"], serde_json::json!(["Python", "Rust"]));
    }

    #[tokio::test]
    async fn test_security_headers_present() {
        let response = sample_router()
            .oneshot(get_request("/api/entries"))
            .await
            .unwrap();

        assert_eq!(
            response.headers().get("x-content-type-options").unwrap(),
            "nosniff"
        );
        assert_eq!(response.headers().get("x-frame-options").unwrap(), "DENY");
        assert!(response.headers().contains_key("content-security-policy"));
    }
}
