use std::time::Duration;

use axum::{Router, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod auth;
pub mod config;
pub mod error;
pub mod extract;
pub mod features;
pub mod middleware;
pub mod openapi;
pub mod state;

use openapi::ApiDoc;
use state::AppState;

/// Assemble the full HTTP application.
///
/// Only `/login`, `/setup-admin`, `/health`, the API docs and the static client
/// are reachable without a bearer token.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    let router = Router::new()
        .merge(features::auth::routes::routes())
        .merge(features::users::routes::routes(state.clone()))
        .nest("/atletas", features::athletes::routes::routes(state.clone()))
        .nest("/equipes", features::teams::routes::routes(state.clone()))
        .nest(
            "/competicoes",
            features::competitions::routes::routes(state.clone()),
        )
        .nest(
            "/inscricoes",
            features::enrollments::routes::routes(state.clone()),
        )
        .nest("/relatorios", features::reports::routes::routes(state.clone()))
        .route("/health", get(features::health::health_check))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let router = match &state.config.static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
