//! HTTP API route definitions.

use axum::routing::{any, get};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::handlers::{self, AppState};
use super::ApiDoc;

/// Create the API router.
///
/// `/people` dispatches GET to the list handler and POST to the create
/// handler; every other method on that path resolves to 405. Unknown paths
/// fall through to axum's default 404.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Status endpoint (any verb, fixed payload)
        .route("/status", any(handlers::status))
        // People collection
        .route(
            "/people",
            get(handlers::list_people)
                .post(handlers::create_person)
                .fallback(handlers::method_not_allowed),
        )
        // Metrics endpoint
        .route("/metrics", get(handlers::metrics))
        // OpenAPI document + Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use pretty_assertions::assert_eq;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::people::PersonStore;

    fn test_app() -> Router {
        create_router(AppState::new(PersonStore::seeded()))
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn post_people(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/people")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn status_endpoint_returns_ok_payload() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn status_endpoint_accepts_any_verb() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/status")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({"status": "ok"}));
    }

    #[tokio::test]
    async fn list_returns_seeded_people_in_order() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/people").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            json!([
                {"id": 1, "name": "Alice", "age": 30},
                {"id": 2, "name": "Bob", "age": 25},
            ])
        );
    }

    #[tokio::test]
    async fn create_then_list_returns_the_new_record() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_people(r#"{"name":"Carol","age":22}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(
            body_json(response).await,
            json!({"id": 3, "name": "Carol", "age": 22})
        );

        let response = app
            .oneshot(Request::builder().uri("/people").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(
            body_json(response).await,
            json!([
                {"id": 1, "name": "Alice", "age": 30},
                {"id": 2, "name": "Bob", "age": 25},
                {"id": 3, "name": "Carol", "age": 22},
            ])
        );
    }

    #[tokio::test]
    async fn malformed_json_body_returns_400() {
        let app = test_app();

        let response = app.oneshot(post_people("{not json")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await, json!({"error": "invalid JSON body"}));
    }

    #[tokio::test]
    async fn empty_name_returns_400_without_mutation() {
        let app = test_app();

        let response = app
            .clone()
            .oneshot(post_people(r#"{"name":"","age":30}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "name and age must be provided and valid"})
        );

        let response = app
            .oneshot(Request::builder().uri("/people").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let people = body_json(response).await;
        assert_eq!(people.as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn non_positive_age_returns_400() {
        let app = test_app();

        for body in [r#"{"name":"Carol","age":0}"#, r#"{"name":"Carol","age":-3}"#] {
            let response = app.clone().oneshot(post_people(body)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            assert_eq!(
                body_json(response).await,
                json!({"error": "name and age must be provided and valid"})
            );
        }
    }

    #[tokio::test]
    async fn missing_fields_fail_validation_not_parsing() {
        let app = test_app();

        let response = app.oneshot(post_people("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            json!({"error": "name and age must be provided and valid"})
        );
    }

    #[tokio::test]
    async fn wrong_verb_on_people_returns_405() {
        let app = test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri("/people")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body_json(response).await, json!({"error": "method not allowed"}));
    }

    #[tokio::test]
    async fn metrics_endpoint_without_recorder_returns_503() {
        let app = test_app();

        let response = app
            .oneshot(Request::builder().uri("/metrics").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
