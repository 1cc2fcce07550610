use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feperj_storage::{
    Database,
    dto::{
        athlete::AthleteResponse,
        common::{CreatedResponse, MessageResponse},
        team::{TeamAthletesResponse, TeamRequest, TeamResponse},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::extract::{JsonBody, RecordId};
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/equipes",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all teams with their athlete count", body = Vec<TeamResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "equipes"
)]
pub async fn list_teams(State(db): State<Database>) -> Result<Response, WebError> {
    let teams = services::list_teams(db.pool()).await?;

    let response: Vec<TeamResponse> = teams.into_iter().map(TeamResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/equipes/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team found", body = TeamResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "equipes"
)]
pub async fn get_team(
    State(db): State<Database>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    let team = services::get_team(db.pool(), id).await?;

    Ok(Json(TeamResponse::from(team)).into_response())
}

#[utoipa::path(
    get,
    path = "/equipes/{id}/atletas",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Athletes of the team", body = TeamAthletesResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "equipes"
)]
pub async fn list_team_athletes(
    State(db): State<Database>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    let athletes = services::list_team_athletes(db.pool(), id).await?;

    let athletes: Vec<AthleteResponse> = athletes.into_iter().map(AthleteResponse::from).collect();

    Ok(Json(TeamAthletesResponse::from(athletes)).into_response())
}

#[utoipa::path(
    post,
    path = "/equipes",
    request_body = TeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Team created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error or team name already taken"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "equipes"
)]
pub async fn create_team(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<TeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let id = services::create_team(db.pool(), &req).await?;
    tracing::info!(team_id = %id, nome = %req.nome, user = user.username(), "Team created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Equipe criada com sucesso")),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/equipes/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    request_body = TeamRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team replaced successfully", body = MessageResponse),
        (status = 400, description = "Validation error or team name already taken"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "equipes"
)]
pub async fn update_team(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<TeamRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_team(db.pool(), id, &req).await?;
    tracing::info!(team_id = %id, user = user.username(), "Team updated");

    Ok(Json(MessageResponse::new("Equipe atualizada com sucesso")).into_response())
}

#[utoipa::path(
    delete,
    path = "/equipes/{id}",
    params(
        ("id" = Uuid, Path, description = "Team id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Team deleted successfully", body = MessageResponse),
        (status = 400, description = "Team still has athletes"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Team not found")
    ),
    tag = "equipes"
)]
pub async fn delete_team(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    services::delete_team(db.pool(), id).await?;
    tracing::info!(team_id = %id, user = user.username(), "Team deleted");

    Ok(Json(MessageResponse::new("Equipe deletada com sucesso")).into_response())
}
