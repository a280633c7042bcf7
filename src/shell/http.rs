use axum::{Json, Router, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::server::new_engine;
use crate::shell::state::AppState;

#[derive(Serialize)]
struct HealthResponse {
    message: &'static str,
}

/// Registers the health route on a fresh engine and applies the request
/// tracing layer. Responds the same whether or not a database is attached.
pub fn router(state: AppState) -> Router {
    new_engine()
        .route("/", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            message: "Server is running",
        }),
    )
}

#[cfg(test)]
mod health_http_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;

    use super::router;

    fn app() -> Router {
        router(AppState { db: None })
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_fixed_body() {
        let response = app()
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Server is running"})
        );
    }

    #[tokio::test]
    async fn it_should_ignore_query_parameters_and_headers() {
        let response = app()
            .oneshot(
                Request::get("/?probe=1&x=y")
                    .header("x-request-id", "abc-123")
                    .header("accept", "text/plain")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Server is running"})
        );
    }

    #[tokio::test]
    async fn it_should_return_404_for_unregistered_paths() {
        let response = app()
            .oneshot(Request::get("/missing").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
