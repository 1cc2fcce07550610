use axum::{Router, routing::post};

use super::handlers::{login, setup_admin};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/setup-admin", post(setup_admin))
}
