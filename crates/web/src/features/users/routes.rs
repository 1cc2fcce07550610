use axum::{Router, middleware, routing::get};

use super::handlers::{create_user, list_users};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/usuarios", get(list_users).post(create_user))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
