use axum::{
    Extension, Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use feperj_storage::{
    Database,
    dto::{
        common::CreatedResponse,
        user::{CreateUserRequest, UserResponse},
    },
    models::ACCESS_LEVEL_ADMIN,
};
use validator::Validate;

use crate::error::WebError;
use crate::extract::JsonBody;
use crate::middleware::auth::CurrentUser;

use super::services;

#[utoipa::path(
    get,
    path = "/usuarios",
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "List all accounts", body = Vec<UserResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not an administrator")
    ),
    tag = "usuarios"
)]
pub async fn list_users(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
) -> Result<Response, WebError> {
    user.require_admin()?;

    let users = services::list_users(db.pool()).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/usuarios",
    request_body = CreateUserRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Account created successfully", body = CreatedResponse),
        (status = 400, description = "Validation error or username already taken"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Only administrators may create administrator accounts")
    ),
    tag = "usuarios"
)]
pub async fn create_user(
    State(db): State<Database>,
    Extension(user): Extension<CurrentUser>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    if req.nivel_acesso == ACCESS_LEVEL_ADMIN {
        user.require_admin()?;
    }

    let id = services::create_user(db.pool(), &req).await?;
    tracing::info!(
        user_id = %id,
        username = %req.username,
        created_by = user.username(),
        "Account created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(id, "Usuário criado com sucesso")),
    )
        .into_response())
}
