//! HTTP API module: routes, handlers, and the OpenAPI document.

pub mod handlers;
pub mod routes;

use utoipa::OpenApi;

pub use handlers::AppState;
pub use routes::create_router;

/// OpenAPI document for the people API.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::status,
        handlers::list_people,
        handlers::create_person,
        handlers::metrics,
    ),
    components(schemas(
        crate::people::Person,
        crate::people::NewPerson,
        crate::error::ErrorBody,
        handlers::StatusResponse,
    )),
    info(title = "people_service", description = "In-memory people record HTTP API")
)]
pub struct ApiDoc;
