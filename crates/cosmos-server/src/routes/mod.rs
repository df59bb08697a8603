pub mod api;
pub mod chat;

use std::path::Path;
use std::sync::Arc;

use axum::{middleware, Router};
use cosmos_llm::Generator;
use cosmos_prompts::InstructionLoader;
use tower_http::services::{ServeDir, ServeFile};

use crate::cors::cors_middleware;

/// Page served at `/`, looked up in the static directory.
pub const INDEX_FILE: &str = "demo.html";

pub struct InnerAppState {
    pub generator: Arc<dyn Generator>,
    pub loader: InstructionLoader,
}

pub type AppState = Arc<InnerAppState>;

pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(api::routes())
        .merge(chat::routes())
        .route_service("/", ServeFile::new(static_dir.join(INDEX_FILE)))
        .fallback_service(ServeDir::new(static_dir))
        .layer(middleware::from_fn(cors_middleware))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::test_helpers::test_app;

    #[tokio::test]
    async fn index_serves_demo_page() {
        let app = test_app("unused");
        let resp = app
            .router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers()["access-control-allow-origin"], "*");
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(body.contains("Cosmos Canvas"));
    }

    #[tokio::test]
    async fn static_files_served() {
        let app = test_app("unused");
        let resp = app
            .router
            .oneshot(
                Request::builder()
                    .uri("/app.js")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_static_path_is_404() {
        let app = test_app("unused");
        let resp = app
            .router
            .oneshot(
                Request::builder()
                    .uri("/missing.css")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
