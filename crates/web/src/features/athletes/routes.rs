use axum::{Router, middleware, routing::get};

use super::handlers::{
    create_athlete, delete_athlete, export_athletes, get_athlete, get_athlete_by_cpf,
    list_athletes, update_athlete,
};
use crate::middleware::auth::require_auth;
use crate::state::AppState;

pub fn routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_athletes).post(create_athlete))
        .route("/export", get(export_athletes))
        .route("/cpf/:cpf", get(get_athlete_by_cpf))
        .route(
            "/:id",
            get(get_athlete).put(update_athlete).delete(delete_athlete),
        )
        .route_layer(middleware::from_fn_with_state(state, require_auth))
}
