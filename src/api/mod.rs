//! HTTP API module - theme catalog and portfolio rendering endpoints

mod portfolios;
mod themes;

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::db::{Database, PortfolioStore};
use crate::render::Renderer;
use crate::theme::TemplateRegistry;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Database>,
    pub store: PortfolioStore,
    pub renderer: Renderer,
}

/// Build the API router
pub fn router(db: Arc<Database>, registry: Arc<TemplateRegistry>) -> Router {
    let store = PortfolioStore::new(db.pool().clone());
    let renderer = Renderer::new(registry);

    let state = AppState {
        db,
        store,
        renderer,
    };

    Router::new()
        .route("/health", get(health_check))
        .route("/", get(root))
        .merge(themes::router())
        .merge(portfolios::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    fn with_status(status: StatusCode, error: impl Into<String>) -> axum::response::Response {
        (
            status,
            Json(ErrorResponse {
                error: error.into(),
            }),
        )
            .into_response()
    }
}

/// Root endpoint
async fn root() -> impl IntoResponse {
    Json(RootResponse {
        name: "folio",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[derive(Serialize)]
struct RootResponse {
    name: &'static str,
    version: &'static str,
}

/// Health check endpoint
async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    match state.db.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "ok",
            }),
        ),
        Err(_) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "unhealthy",
                database: "error",
            }),
        ),
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    database: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    async fn app() -> Router {
        let db = Arc::new(Database::new(None).await.unwrap());
        let registry = Arc::new(TemplateRegistry::builtin("minimal").unwrap());
        router(db, registry)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, String) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::get("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app().await, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("healthy"));
    }

    #[tokio::test]
    async fn test_create_then_render() {
        let app = app().await;
        let request = Request::post("/portfolios")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"slug":"ada","content":{"name":"Ada"},"options":[{"themeId":"elegant"}]}"#,
            ))
            .unwrap();
        let (status, _) = send(app.clone(), request).await;
        assert_eq!(status, StatusCode::CREATED);

        let request = Request::get("/portfolios/ada/render").body(Body::empty()).unwrap();
        let (status, page) = send(app, request).await;
        assert_eq!(status, StatusCode::OK);
        assert!(page.contains(r#"data-theme="elegant""#));
    }

    #[tokio::test]
    async fn test_invalid_slug_is_bad_request() {
        let request = Request::post("/portfolios")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"slug":"-x-","content":{"name":"Ada"}}"#))
            .unwrap();
        let (status, body) = send(app().await, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("invalid slug"));
    }
}
