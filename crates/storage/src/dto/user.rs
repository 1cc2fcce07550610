use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{ACCESS_LEVEL_USER, User};

fn default_access_level() -> String {
    ACCESS_LEVEL_USER.to_string()
}

#[derive(Clone, Deserialize, Validate, ToSchema)]
pub struct CreateUserRequest {
    #[validate(length(min = 1, max = 64, message = "Usuário é obrigatório"))]
    pub username: String,

    #[validate(length(min = 1, max = 128, message = "Senha é obrigatória"))]
    pub password: String,

    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(length(min = 1, max = 255, message = "Email é obrigatório"))]
    pub email: String,

    #[serde(default = "default_access_level")]
    #[validate(length(min = 1, max = 32))]
    pub nivel_acesso: String,
}

/// `application/x-www-form-urlencoded` body of `POST /login`
#[derive(Clone, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Public view of an account; the password hash never leaves the store.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub username: String,
    pub nome: String,
    pub email: String,
    pub nivel_acesso: String,
    pub data_criacao: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: String,
    pub usuario: UserResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetupAdminResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            nome: user.nome,
            email: user.email,
            nivel_acesso: user.nivel_acesso,
            data_criacao: user.data_criacao,
        }
    }
}
