use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::enrollment::EnrollmentRequest;
use crate::error::{Result, StorageError};
use crate::models::EnrollmentWithNames;

pub struct EnrollmentRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EnrollmentRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all enrollments with athlete and competition names ("N/A" when unresolved)
    pub async fn list(&self) -> Result<Vec<EnrollmentWithNames>> {
        let enrollments = sqlx::query_as::<_, EnrollmentWithNames>(
            r#"
            SELECT i.*,
                   COALESCE(a.nome, 'N/A') AS atleta_nome,
                   COALESCE(c.nome, 'N/A') AS competicao_nome
            FROM inscricoes i
            LEFT JOIN atletas a ON a.id::text = i.atleta_id
            LEFT JOIN competicoes c ON c.id::text = i.competicao_id
            ORDER BY i.data_inscricao, i.id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(enrollments)
    }

    /// Number of enrollments referencing `competition_id`
    pub async fn count_by_competition(&self, competition_id: Uuid) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM inscricoes WHERE competicao_id = $1")
                .bind(competition_id.to_string())
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    pub async fn create(&self, req: &EnrollmentRequest) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO inscricoes (atleta_id, competicao_id, categorias, valor_pago, status)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&req.atleta_id)
        .bind(&req.competicao_id)
        .bind(&req.categorias)
        .bind(req.valor_pago)
        .bind(&req.status)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM inscricoes WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
