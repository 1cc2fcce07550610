use feperj_storage::{
    dto::user::CreateUserRequest,
    models::User,
    repository::user::{NewUser, UserRepository},
    services::integrity,
};
use sqlx::PgPool;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::error::WebResult;

/// List all accounts
pub async fn list_users(pool: &PgPool) -> WebResult<Vec<User>> {
    Ok(UserRepository::new(pool).list().await?)
}

/// Create an account with a hashed password
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> WebResult<Uuid> {
    integrity::ensure_username_available(pool, &request.username).await?;

    let password_hash = hash_password(&request.password)?;
    let new_user = NewUser {
        username: &request.username,
        password_hash: &password_hash,
        nome: &request.nome,
        email: &request.email,
        nivel_acesso: &request.nivel_acesso,
    };

    Ok(UserRepository::new(pool).create(&new_user).await?)
}
