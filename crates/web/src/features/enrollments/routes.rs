use axum::{
    Router, middleware,
    routing::{delete, get},
};

use super::handlers::{cancel_enrollment, create_enrollment, list_enrollments};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_enrollments).post(create_enrollment))
        .route("/:id", delete(cancel_enrollment))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
