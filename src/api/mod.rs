//! REST API layer: route handlers, DTOs, OpenAPI document, and router
//! composition.

pub mod dto;
pub mod handlers;
pub mod openapi;

use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::response::Redirect;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use crate::app_state::AppState;
use crate::config::RosterConfig;

/// Builds the complete API router with all REST endpoints.
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(handlers::routes())
        .merge(handlers::system::routes())
}

/// Builds the servable application: routes, OpenAPI document, the
/// optional browser client, and the tracing, CORS and timeout middleware.
pub fn build_app(state: AppState, config: &RosterConfig) -> Router {
    let mut router = build_router().merge(openapi_routes());
    if let Some(dir) = &config.static_dir {
        router = router.merge(static_routes(dir));
    }
    router
        .layer(request_timeout_layer(config.request_timeout))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Requests running past `timeout` are answered with 408.
fn request_timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Serves the browser client under `/static` and redirects `/` to it.
fn static_routes(dir: &Path) -> Router<AppState> {
    Router::new()
        .route("/", get(|| async { Redirect::temporary("/static/index.html") }))
        .nest_service("/static", ServeDir::new(dir))
}

#[cfg(feature = "swagger-ui")]
fn openapi_routes() -> Router<AppState> {
    Router::new().merge(
        utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
            .url("/api-docs/openapi.json", openapi::ApiDoc::openapi()),
    )
}

#[cfg(not(feature = "swagger-ui"))]
fn openapi_routes() -> Router<AppState> {
    use axum::Json;

    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(openapi::ApiDoc::openapi()) }),
    )
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn slow_request_times_out_with_408() {
        let router: Router = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(30)).await;
                }),
            )
            .layer(request_timeout_layer(Duration::from_millis(20)));

        let Ok(request) = Request::builder().uri("/slow").body(Body::empty()) else {
            panic!("invalid request");
        };
        let Ok(response) = router.oneshot(request).await;
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }
}
