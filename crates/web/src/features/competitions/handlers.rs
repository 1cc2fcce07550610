use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feperj_storage::{
    Database,
    dto::{
        common::{CreatedResponse, MessageResponse},
        competition::{CompetitionRequest, CompetitionResponse},
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
    path = "/competicoes",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all competitions with their enrollment count", body = Vec<CompetitionResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "competicoes"
)]
pub async fn list_competitions(
    State(db): State<Database>,
) -> Result<Json<Vec<CompetitionResponse>>, WebError> {
    let competitions = services::list_competitions(db.pool()).await?;

    let response: Vec<CompetitionResponse> = competitions
        .into_iter()
        .map(CompetitionResponse::from)
        .collect();

    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/competicoes/{id}",
    params(
        ("id" = Uuid, Path, description = "Competition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition found", body = CompetitionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competicoes"
)]
pub async fn get_competition(
    State(db): State<Database>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    let competition = services::get_competition(db.pool(), id).await?;

    Ok(Json(CompetitionResponse::from(competition)).into_response())
}

#[utoipa::path(
    post,
    path = "/competicoes",
    request_body = CompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Competition created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "competicoes"
)]
pub async fn create_competition(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<CompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let id = services::create_competition(db.pool(), &req).await?;
    tracing::info!(competition_id = %id, user = user.username(), "Competition created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Competição criada com sucesso")),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/competicoes/{id}",
    params(
        ("id" = Uuid, Path, description = "Competition id")
    ),
    request_body = CompetitionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition replaced successfully", body = MessageResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competicoes"
)]
pub async fn update_competition(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
    JsonBody(req): JsonBody<CompetitionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    services::update_competition(db.pool(), id, &req).await?;
    tracing::info!(competition_id = %id, user = user.username(), "Competition updated");

    Ok(Json(MessageResponse::new("Competição atualizada com sucesso")).into_response())
}

#[utoipa::path(
    delete,
    path = "/competicoes/{id}",
    params(
        ("id" = Uuid, Path, description = "Competition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Competition deleted successfully", body = MessageResponse),
        (status = 400, description = "Competition still has enrollments"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found")
    ),
    tag = "competicoes"
)]
pub async fn delete_competition(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    services::delete_competition(db.pool(), id).await?;
    tracing::info!(competition_id = %id, user = user.username(), "Competition deleted");

    Ok(Json(MessageResponse::new("Competição deletada com sucesso")).into_response())
}
