//! OpenAPI document
//!
//! Generated at compile time from the `#[utoipa::path]` annotations on the
//! handlers. Served together with Swagger UI in development only.

use crate::api::{RESOURCES_TAG, SYSTEM_TAG};
use utoipa::OpenApi;

/// Path the OpenAPI JSON document is served at
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

/// Path Swagger UI is served at
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

/// OpenAPI specification of the service
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::system::root,
        crate::api::system::health_check,
        crate::api::system::version,
        crate::api::system::status,
        crate::api::resources::list_resources,
        crate::api::resources::serve_resource,
    ),
    components(
        schemas(
            crate::models::VersionInfo,
            crate::models::StatusInfo,
        )
    ),
    tags(
        (name = SYSTEM_TAG, description = "Service identity, health and status"),
        (name = RESOURCES_TAG, description = "Static resource listing and download")
    ),
    info(
        title = "Vision+ Medical Imaging System API",
        version = "1.0.0",
        description = "Health, version and status endpoints plus read-only access to the resource directory",
    )
)]
pub struct ApiDoc;
