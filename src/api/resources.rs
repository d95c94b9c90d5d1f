//! Resource endpoints
//!
//! Lists and serves the files of the resource directory. Both handlers are
//! only routed when file serving is enabled, with the directory as their state.

use super::RESOURCES_TAG;
use crate::error::AppError;
use crate::services::ResourceDirectory;
use axum::{
    extract::{Path, Request, State},
    response::{IntoResponse, Json, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

/// GET /api/resources - Absolute paths of the files in the resource directory
#[utoipa::path(
    get,
    path = "/api/resources",
    tag = RESOURCES_TAG,
    responses(
        (status = 200, description = "Absolute file paths", body = Vec<String>),
        (status = 500, description = "Directory could not be read")
    )
)]
pub async fn list_resources(
    State(resources): State<ResourceDirectory>,
) -> Result<Json<Vec<String>>, AppError> {
    let files = resources.list().await?;
    Ok(Json(files))
}

/// GET /resources/*path - Raw bytes of a resource file
///
/// The path is resolved inside the directory first; the file is then streamed
/// with range and conditional request support.
#[utoipa::path(
    get,
    path = "/resources/{path}",
    tag = RESOURCES_TAG,
    params(
        ("path" = String, Path, description = "File path relative to the resource directory")
    ),
    responses(
        (status = 200, description = "File contents with an inferred content type"),
        (status = 206, description = "Requested byte range of the file"),
        (status = 304, description = "File unchanged since If-Modified-Since"),
        (status = 403, description = "Path escapes the resource directory"),
        (status = 404, description = "No such file, hidden file or unknown file type")
    )
)]
pub async fn serve_resource(
    State(resources): State<ResourceDirectory>,
    Path(path): Path<String>,
    request: Request,
) -> Result<Response, AppError> {
    let file = resources.resolve(&path).await?;

    let response = match ServeFile::new(file).oneshot(request).await {
        Ok(response) => response,
        Err(never) => match never {},
    };
    Ok(response.into_response())
}
