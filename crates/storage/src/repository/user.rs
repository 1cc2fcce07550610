use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::models::User;
use crate::services::integrity::DUPLICATE_USERNAME;

/// Fields of a new account; the password is already hashed.
pub struct NewUser<'a> {
    pub username: &'a str,
    pub password_hash: &'a str,
    pub nome: &'a str,
    pub email: &'a str,
    pub nivel_acesso: &'a str,
}

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM usuarios ORDER BY username")
            .fetch_all(self.pool)
            .await?;

        Ok(users)
    }

    pub async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM usuarios WHERE username = $1")
            .bind(username)
            .fetch_optional(self.pool)
            .await?;

        Ok(user)
    }

    pub async fn exists_by_username(&self, username: &str) -> Result<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM usuarios WHERE username = $1)",
        )
        .bind(username)
        .fetch_one(self.pool)
        .await?;

        Ok(exists)
    }

    pub async fn create(&self, user: &NewUser<'_>) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO usuarios (username, password_hash, nome, email, nivel_acesso)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(user.username)
        .bind(user.password_hash)
        .bind(user.nome)
        .bind(user.email)
        .bind(user.nivel_acesso)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_USERNAME))?;

        Ok(id)
    }
}
