use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

pub const ACCESS_LEVEL_ADMIN: &str = "admin";
pub const ACCESS_LEVEL_USER: &str = "usuario";

/// Stored account. Never serialized directly: it carries the password hash.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub nome: String,
    pub email: String,
    pub nivel_acesso: String,
    pub data_criacao: NaiveDateTime,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.nivel_acesso == ACCESS_LEVEL_ADMIN
    }
}
