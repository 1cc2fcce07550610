use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_competition, delete_competition, get_competition, list_competitions,
    update_competition,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_competitions).post(create_competition))
        .route(
            "/:id",
            get(get_competition)
                .put(update_competition)
                .delete(delete_competition),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
