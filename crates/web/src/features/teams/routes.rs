use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_team, delete_team, get_team, list_team_athletes, list_teams, update_team,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_teams).post(create_team))
        .route("/:id", get(get_team).put(update_team).delete(delete_team))
        .route("/:id/atletas", get(list_team_athletes))
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
