//! Route table
//!
//! Builds the axum router from the application state: which routes exist
//! depends on whether file serving, HTTPS redirection and API docs are on.

use crate::api::{resources, system};
use crate::middleware::{https_redirect_middleware, request_id_middleware};
use crate::openapi::{ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
use crate::state::AppState;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let mut router: Router<Arc<AppState>> = Router::new()
        .route("/", get(system::root))
        .route("/api/health", get(system::health_check))
        .route("/api/version", get(system::version))
        .route("/api/status", get(system::status));

    if let Some(directory) = state.resources.clone() {
        let resource_routes = Router::new()
            .route("/api/resources", get(resources::list_resources))
            .route("/resources/*path", get(resources::serve_resource))
            .with_state(directory);
        router = router.merge(resource_routes);
    }

    if state.environment.is_development() {
        router = router
            .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()));
    }

    if let Some(port) = state.https_redirect_port {
        router = router.layer(axum::middleware::from_fn_with_state(
            port,
            https_redirect_middleware,
        ));
    }

    router
        // Middleware (order matters - CORS is outermost so preflights never redirect)
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
