use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::team::TeamRequest;
use crate::error::{Result, StorageError};
use crate::models::TeamWithCount;
use crate::services::integrity::DUPLICATE_TEAM_NAME;

const SELECT_WITH_COUNT: &str = r#"
    SELECT e.*,
           (SELECT COUNT(*) FROM atletas a WHERE a.id_equipe = e.id::text) AS total_atletas
    FROM equipes e
"#;

/// Repository for Team database operations
pub struct TeamRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TeamRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all teams with their athlete count
    pub async fn list(&self) -> Result<Vec<TeamWithCount>> {
        let teams = sqlx::query_as::<_, TeamWithCount>(&format!(
            "{SELECT_WITH_COUNT} ORDER BY e.nome"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(teams)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<TeamWithCount> {
        let team = sqlx::query_as::<_, TeamWithCount>(&format!(
            "{SELECT_WITH_COUNT} WHERE e.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(team)
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM equipes WHERE id = $1)")
                .bind(id)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn exists_by_name(&self, nome: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM equipes WHERE nome = $1)")
                .bind(nome)
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    pub async fn create(&self, req: &TeamRequest) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO equipes (nome, cidade, estado, telefone, email, responsavel)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id
            "#,
        )
        .bind(&req.nome)
        .bind(&req.cidade)
        .bind(&req.estado)
        .bind(&req.telefone)
        .bind(&req.email)
        .bind(&req.responsavel)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_TEAM_NAME))?;

        Ok(id)
    }

    pub async fn update(&self, id: Uuid, req: &TeamRequest) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE equipes
            SET nome = $2,
                cidade = $3,
                estado = $4,
                telefone = $5,
                email = $6,
                responsavel = $7,
                data_atualizacao = (NOW() AT TIME ZONE 'utc')
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&req.nome)
        .bind(&req.cidade)
        .bind(&req.estado)
        .bind(&req.telefone)
        .bind(&req.email)
        .bind(&req.responsavel)
        .execute(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_TEAM_NAME))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM equipes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
