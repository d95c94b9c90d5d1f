//! System endpoints: banner, health, version and status

use super::SYSTEM_TAG;
use crate::models::{StatusInfo, VersionInfo, HEALTH_MESSAGE, SYSTEM_NAME};
use axum::Json;

/// GET / - System banner
#[utoipa::path(
    get,
    path = "/",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "System name", body = String, content_type = "text/plain", example = "Vision+ Medical Imaging System")
    )
)]
pub async fn root() -> &'static str {
    SYSTEM_NAME
}

/// GET /api/health - Liveness check
#[utoipa::path(
    get,
    path = "/api/health",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service is healthy", body = String, content_type = "text/plain", example = "System is healthy")
    )
)]
pub async fn health_check() -> &'static str {
    HEALTH_MESSAGE
}

/// GET /api/version - Version and developer information
#[utoipa::path(
    get,
    path = "/api/version",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Version information", body = VersionInfo)
    )
)]
pub async fn version() -> Json<VersionInfo> {
    Json(VersionInfo::current())
}

/// GET /api/status - Online status with the current UTC time
#[utoipa::path(
    get,
    path = "/api/status",
    tag = SYSTEM_TAG,
    responses(
        (status = 200, description = "Service status", body = StatusInfo)
    )
)]
pub async fn status() -> Json<StatusInfo> {
    Json(StatusInfo::online())
}
