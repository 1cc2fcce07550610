use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::{
        StatusCode,
        header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    },
    response::{IntoResponse, Response},
};
use chrono::Local;
use feperj_storage::{
    Database,
    dto::{
        athlete::{AthleteRequest, AthleteResponse},
        common::{CreatedResponse, MessageResponse},
    },
};
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{JsonBody, RecordId};
use crate::middleware::auth::CurrentUser;

use super::{export::athletes_csv, services};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ExportQuery {
    /// Restrict the export to one team's athletes
    pub equipe: Option<String>,
}

#[utoipa::path(
    get,
    path = "/atletas",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all athletes with their team name", body = Vec<AthleteResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "atletas"
)]
pub async fn list_athletes(State(db): State<Database>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(db.pool()).await?;

    let response: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/export",
    params(ExportQuery),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "CSV spreadsheet of athletes with their team name", body = String, content_type = "text/csv"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "atletas"
)]
pub async fn export_athletes(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<ExportQuery>,
) -> Result<Response, WebError> {
    let team = match query.equipe.as_deref().filter(|id| !id.is_empty()) {
        Some(id) => Some(Uuid::parse_str(id).map_err(|_| WebError::NotFound)?),
        None => None,
    };

    let athletes = services::export_athletes(db.pool(), team).await?;
    let body = athletes_csv(&athletes)
        .map_err(|e| WebError::InternalServerError(format!("CSV export failed: {e}")))?;
    tracing::info!(rows = athletes.len(), user = user.username(), "Athletes exported");

    let filename = format!("atletas_feperj_{}.csv", Local::now().format("%Y-%m-%d"));
    Ok((
        [
            (CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn get_athlete(
    State(db): State<Database>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete(db.pool(), id).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    get,
    path = "/atletas/cpf/{cpf}",
    params(
        ("cpf" = String, Path, description = "CPF, formatted or digits only")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete found", body = AthleteResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No athlete with this CPF")
    ),
    tag = "atletas"
)]
pub async fn get_athlete_by_cpf(
    State(db): State<Database>,
    Path(cpf): Path<String>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete_by_cpf(db.pool(), &cpf).await?;

    Ok(Json(AthleteResponse::from(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/atletas",
    request_body = AthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Athlete created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error or CPF already registered"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "atletas"
)]
pub async fn create_athlete(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<AthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let id = services::create_athlete(db.pool(), &req).await?;
    tracing::info!(athlete_id = %id, user = user.username(), "Athlete created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Atleta criado com sucesso")),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    request_body = AthleteRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete replaced successfully", body = MessageResponse),
        (status = 400, description = "Validation error or CPF already registered"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn update_athlete(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<AthleteRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_athlete(db.pool(), id, &req).await?;
    tracing::info!(athlete_id = %id, user = user.username(), "Athlete updated");

    Ok(Json(MessageResponse::new("Atleta atualizado com sucesso")).into_response())
}

#[utoipa::path(
    delete,
    path = "/atletas/{id}",
    params(
        ("id" = Uuid, Path, description = "Athlete id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athlete deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Athlete not found")
    ),
    tag = "atletas"
)]
pub async fn delete_athlete(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    services::delete_athlete(db.pool(), id).await?;
    tracing::info!(athlete_id = %id, user = user.username(), "Athlete deleted");

    Ok(Json(MessageResponse::new("Atleta deletado com sucesso")).into_response())
}
