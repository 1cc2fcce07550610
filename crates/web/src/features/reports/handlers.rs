use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use feperj_storage::{Database, dto::report::DashboardResponse};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/relatorios/dashboard",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Collection totals and athletes per team", body = DashboardResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "relatorios"
)]
pub async fn dashboard(State(db): State<Database>) -> Result<Response, WebError> {
    let report = services::dashboard(db.pool()).await?;

    Ok(Json(report).into_response())
}
