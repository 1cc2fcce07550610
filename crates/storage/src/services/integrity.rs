//! Uniqueness and referential checks run before writes.
//!
//! The uniqueness checks give a friendly early answer; the unique indexes on
//! `usuarios.username`, `atletas.cpf` and `equipes.nome` still reject the
//! concurrent insert that slips past them, with the same message.

use sqlx::PgPool;
use uuid::Uuid;

use crate::error::{Result, StorageError};
use crate::repository::{
    athlete::AthleteRepository, enrollment::EnrollmentRepository, team::TeamRepository,
    user::UserRepository,
};

pub const DUPLICATE_USERNAME: &str = "Usuário já existe";
pub const DUPLICATE_CPF: &str = "CPF já cadastrado";
pub const DUPLICATE_TEAM_NAME: &str = "Equipe já existe";
pub const TEAM_HAS_ATHLETES: &str = "Não é possível deletar equipe com atletas";
pub const COMPETITION_HAS_ENROLLMENTS: &str = "Não é possível deletar competição com inscrições";

fn conflict_if(taken: bool, message: &str) -> Result<()> {
    if taken {
        tracing::debug!(reason = message, "Write rejected by integrity check");
        Err(StorageError::ConstraintViolation(message.to_string()))
    } else {
        Ok(())
    }
}

pub async fn ensure_username_available(pool: &PgPool, username: &str) -> Result<()> {
    let taken = UserRepository::new(pool).exists_by_username(username).await?;
    conflict_if(taken, DUPLICATE_USERNAME)
}

pub async fn ensure_cpf_available(pool: &PgPool, cpf: &str) -> Result<()> {
    let taken = AthleteRepository::new(pool).exists_by_cpf(cpf).await?;
    conflict_if(taken, DUPLICATE_CPF)
}

pub async fn ensure_team_name_available(pool: &PgPool, nome: &str) -> Result<()> {
    let taken = TeamRepository::new(pool).exists_by_name(nome).await?;
    conflict_if(taken, DUPLICATE_TEAM_NAME)
}

/// A team can only be deleted once no athlete references it.
pub async fn ensure_team_has_no_athletes(pool: &PgPool, team_id: Uuid) -> Result<()> {
    let count = AthleteRepository::new(pool).count_by_team(team_id).await?;
    conflict_if(count > 0, TEAM_HAS_ATHLETES)
}

/// A competition can only be deleted once no enrollment references it.
pub async fn ensure_competition_has_no_enrollments(
    pool: &PgPool,
    competition_id: Uuid,
) -> Result<()> {
    let count = EnrollmentRepository::new(pool)
        .count_by_competition(competition_id)
        .await?;
    conflict_if(count > 0, COMPETITION_HAS_ENROLLMENTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_if() {
        assert!(conflict_if(false, DUPLICATE_CPF).is_ok());

        match conflict_if(true, DUPLICATE_CPF) {
            Err(StorageError::ConstraintViolation(msg)) => assert_eq!(msg, DUPLICATE_CPF),
            other => panic!("expected constraint violation, got {other:?}"),
        }
    }
}
