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
        enrollment::{EnrollmentRequest, EnrollmentResponse},
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
    path = "/inscricoes",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all enrollments with athlete and competition names", body = Vec<EnrollmentResponse>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "inscricoes"
)]
pub async fn list_enrollments(State(db): State<Database>) -> Result<Response, WebError> {
    let enrollments = services::list_enrollments(db.pool()).await?;

    let response: Vec<EnrollmentResponse> = enrollments
        .into_iter()
        .map(EnrollmentResponse::from)
        .collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/inscricoes",
    request_body = EnrollmentRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Enrollment created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "inscricoes"
)]
pub async fn create_enrollment(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<EnrollmentRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let id = services::create_enrollment(db.pool(), &req).await?;
    tracing::info!(
        enrollment_id = %id,
        atleta_id = %req.atleta_id,
        competicao_id = %req.competicao_id,
        user = user.username(),
        "Enrollment created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Inscrição criada com sucesso")),
    )
        .into_response())
}

#[utoipa::path(
    delete,
    path = "/inscricoes/{id}",
    params(
        ("id" = Uuid, Path, description = "Enrollment id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Enrollment cancelled", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Enrollment not found")
    ),
    tag = "inscricoes"
)]
pub async fn cancel_enrollment(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    RecordId(id): RecordId,
) -> Result<Response, WebError> {
    services::cancel_enrollment(db.pool(), id).await?;
    tracing::info!(enrollment_id = %id, user = user.username(), "Enrollment cancelled");

    Ok(Json(MessageResponse::new("Inscrição cancelada com sucesso")).into_response())
}
