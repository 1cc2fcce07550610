use feperj_storage::{
    dto::user::{LoginResponse, SetupAdminResponse, UserResponse},
    error::StorageError,
    models::{ACCESS_LEVEL_ADMIN, User},
    repository::user::{NewUser, UserRepository},
};
use sqlx::PgPool;
use std::sync::LazyLock;

use crate::auth::{
    jwt::{JwtConfig, issue_token},
    password::{hash_password, verify_password},
};
use crate::config::AdminCredentials;
use crate::error::{WebError, WebResult};

pub const INVALID_CREDENTIALS: &str = "Credenciais inválidas";

const ADMIN_DISPLAY_NAME: &str = "Administrador FEPERJ";
const ADMIN_EMAIL: &str = "admin@feperj.com";

/// Hash verified on the unknown-username path so both login failures cost
/// one Argon2 verification.
static UNKNOWN_USER_HASH: LazyLock<Option<String>> =
    LazyLock::new(|| hash_password("feperj-unknown-user").ok());

fn spend_verification(password: &str) {
    if let Some(hash) = UNKNOWN_USER_HASH.as_deref() {
        let _ = verify_password(password, hash);
    }
}

fn password_matches(user: &User, password: &str) -> bool {
    match verify_password(password, &user.password_hash) {
        Ok(matches) => matches,
        Err(e) => {
            tracing::warn!(username = %user.username, "Stored password hash is unreadable: {}", e);
            false
        }
    }
}

/// Check credentials and issue a token.
///
/// Unknown user and wrong password fail the same way.
pub async fn login(
    pool: &PgPool,
    jwt: &JwtConfig,
    username: &str,
    password: &str,
) -> WebResult<LoginResponse> {
    let user = match UserRepository::new(pool).find_by_username(username).await? {
        Some(user) => Some(user).filter(|user| password_matches(user, password)),
        None => {
            spend_verification(password);
            None
        }
    };

    let Some(user) = user else {
        tracing::warn!(username, "Failed login attempt");
        return Err(WebError::Unauthorized(INVALID_CREDENTIALS));
    };

    let access_token = issue_token(&user.username, jwt)
        .map_err(|e| WebError::InternalServerError(format!("token signing failed: {e}")))?;

    Ok(LoginResponse {
        access_token,
        token_type: "bearer".to_string(),
        usuario: UserResponse::from(user),
    })
}

fn already_exists() -> SetupAdminResponse {
    SetupAdminResponse {
        message: "Usuário admin já existe".to_string(),
        id: None,
    }
}

/// Create the configured administrator once; later calls change nothing.
pub async fn setup_admin(
    pool: &PgPool,
    admin: Option<&AdminCredentials>,
) -> WebResult<SetupAdminResponse> {
    let admin = admin.ok_or_else(|| {
        WebError::BadRequest("Administrador inicial não configurado".to_string())
    })?;

    let repo = UserRepository::new(pool);
    if repo.exists_by_username(&admin.username).await? {
        return Ok(already_exists());
    }

    let password_hash = hash_password(&admin.password)?;
    let new_admin = NewUser {
        username: &admin.username,
        password_hash: &password_hash,
        nome: ADMIN_DISPLAY_NAME,
        email: ADMIN_EMAIL,
        nivel_acesso: ACCESS_LEVEL_ADMIN,
    };

    match repo.create(&new_admin).await {
        Ok(id) => {
            tracing::info!(username = %admin.username, "Administrator account created");
            Ok(SetupAdminResponse {
                message: "Usuário admin criado com sucesso".to_string(),
                id: Some(id),
            })
        }
        // A concurrent call created it between the check and the insert.
        Err(StorageError::ConstraintViolation(_)) => Ok(already_exists()),
        Err(e) => Err(e.into()),
    }
}
