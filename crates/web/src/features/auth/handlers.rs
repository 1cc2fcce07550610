use axum::{
    Form, Json,
    extract::State,
    response::{IntoResponse, Response},
};
use feperj_storage::dto::user::{LoginForm, LoginResponse, SetupAdminResponse};

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Authenticated; bearer token issued", body = LoginResponse),
        (status = 401, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn login(
    State(state): State<AppState>,
    Form(form): Form<LoginForm>,
) -> Result<Response, WebError> {
    let response = services::login(
        state.db.pool(),
        &state.config.jwt,
        &form.username,
        &form.password,
    )
    .await?;

    tracing::info!(username = %response.usuario.username, "User logged in");

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/setup-admin",
    responses(
        (status = 200, description = "Administrator created, or it already existed", body = SetupAdminResponse),
        (status = 400, description = "Administrator credentials are not configured")
    ),
    tag = "auth"
)]
pub async fn setup_admin(State(state): State<AppState>) -> Result<Response, WebError> {
    let response = services::setup_admin(state.db.pool(), state.config.admin.as_ref()).await?;

    Ok(Json(response).into_response())
}
