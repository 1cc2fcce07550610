use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::competition::CompetitionRequest;
use crate::error::{Result, StorageError};
use crate::models::CompetitionWithCount;

const SELECT_WITH_COUNT: &str = r#"
    SELECT c.*,
           (SELECT COUNT(*) FROM inscricoes i
             WHERE i.competicao_id = c.id::text) AS total_inscricoes
    FROM competicoes c
"#;

/// Repository for Competition database operations
pub struct CompetitionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompetitionRepository<'a> {
    /// Create a new CompetitionRepository
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all competitions with their enrollment count
    pub async fn list(&self) -> Result<Vec<CompetitionWithCount>> {
        let competitions = sqlx::query_as::<_, CompetitionWithCount>(&format!(
            "{SELECT_WITH_COUNT} ORDER BY c.data_inicio DESC, c.data_criacao DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(competitions)
    }

    /// Get a competition by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<CompetitionWithCount> {
        let competition = sqlx::query_as::<_, CompetitionWithCount>(&format!(
            "{SELECT_WITH_COUNT} WHERE c.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(competition)
    }

    /// Create a new competition
    pub async fn create(&self, req: &CompetitionRequest) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO competicoes (nome, data_inicio, data_fim, "local", descricao,
                                     valor_inscricao, permite_dobra,
                                     periodo_inscricao_inicio, periodo_inscricao_fim)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&req.nome)
        .bind(&req.data_inicio)
        .bind(&req.data_fim)
        .bind(&req.local)
        .bind(&req.descricao)
        .bind(req.valor_inscricao)
        .bind(req.permite_dobra)
        .bind(&req.periodo_inscricao_inicio)
        .bind(&req.periodo_inscricao_fim)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    /// Replace every mutable field of a competition
    pub async fn update(&self, id: Uuid, req: &CompetitionRequest) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE competicoes
            SET nome = $2,
                data_inicio = $3,
                data_fim = $4,
                "local" = $5,
                descricao = $6,
                valor_inscricao = $7,
                permite_dobra = $8,
                periodo_inscricao_inicio = $9,
                periodo_inscricao_fim = $10,
                data_atualizacao = (NOW() AT TIME ZONE 'utc')
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&req.nome)
        .bind(&req.data_inicio)
        .bind(&req.data_fim)
        .bind(&req.local)
        .bind(&req.descricao)
        .bind(req.valor_inscricao)
        .bind(req.permite_dobra)
        .bind(&req.periodo_inscricao_inicio)
        .bind(&req.periodo_inscricao_fim)
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Delete a competition
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM competicoes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
