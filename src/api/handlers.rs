//! HTTP API handlers.

use std::time::Instant;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;
use crate::metrics::{
    inc_create_rejected, inc_people_created, inc_people_list_requests, inc_status_requests,
    record_create_latency,
};
use crate::people::{NewPerson, PersonStore};

/// Application state shared with handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared person store.
    pub store: PersonStore,
    /// Prometheus render handle, present once the recorder is installed.
    pub metrics: Option<PrometheusHandle>,
}

impl AppState {
    /// Create app state around a store, without a metrics exporter.
    pub fn new(store: PersonStore) -> Self {
        Self {
            store,
            metrics: None,
        }
    }

    /// Create app state with a Prometheus render handle.
    pub fn with_metrics(store: PersonStore, handle: PrometheusHandle) -> Self {
        Self {
            store,
            metrics: Some(handle),
        }
    }
}

/// Status probe response.
#[derive(Debug, Serialize, ToSchema)]
pub struct StatusResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Status probe handler. Fixed payload regardless of verb or request body.
#[utoipa::path(
    get,
    path = "/status",
    responses((status = 200, description = "Service is up", body = StatusResponse))
)]
pub async fn status() -> impl IntoResponse {
    inc_status_requests();
    Json(StatusResponse { status: "ok" })
}

/// List handler. Returns the full collection in insertion order.
#[utoipa::path(
    get,
    path = "/people",
    responses(
        (status = 200, description = "All records in insertion order", body = [crate::people::Person]),
        (status = 405, description = "Unsupported method", body = crate::error::ErrorBody)
    )
)]
pub async fn list_people(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let people = state.store.list().await;
    inc_people_list_requests();

    // Serialize explicitly so an encoding failure takes the error path
    // instead of tearing down the response mid-write.
    let body = serde_json::to_value(&people)?;
    Ok(Json(body))
}

/// Create handler. Decodes `{name, age}`, delegates validation to the store.
#[utoipa::path(
    post,
    path = "/people",
    request_body = NewPerson,
    responses(
        (status = 201, description = "Record created", body = crate::people::Person),
        (status = 400, description = "Invalid JSON or invalid name/age", body = crate::error::ErrorBody),
        (status = 405, description = "Unsupported method", body = crate::error::ErrorBody)
    )
)]
pub async fn create_person(
    State(state): State<AppState>,
    body: Result<Json<NewPerson>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let start = Instant::now();
    let Json(req) = body?;

    let person = match state.store.create(&req.name, req.age).await {
        Ok(person) => person,
        Err(e) => {
            inc_create_rejected();
            return Err(e.into());
        }
    };

    inc_people_created();
    record_create_latency(start);

    let body = serde_json::to_value(&person)?;
    Ok((StatusCode::CREATED, Json(body)))
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Prometheus exposition handler.
#[utoipa::path(
    get,
    path = "/metrics",
    responses(
        (status = 200, description = "Prometheus text exposition", body = String),
        (status = 503, description = "Recorder not installed", body = String)
    )
)]
pub async fn metrics(State(state): State<AppState>) -> Response {
    match &state.metrics {
        Some(handle) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            handle.render(),
        )
            .into_response(),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            "metrics recorder not installed",
        )
            .into_response(),
    }
}
