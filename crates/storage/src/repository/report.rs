use sqlx::PgPool;

use crate::error::Result;
use crate::models::{DashboardTotals, TeamAthleteCount};

pub struct ReportRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ReportRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Document count of each registry collection
    pub async fn totals(&self) -> Result<DashboardTotals> {
        let totals = sqlx::query_as::<_, DashboardTotals>(
            r#"
            SELECT (SELECT COUNT(*) FROM atletas) AS atletas,
                   (SELECT COUNT(*) FROM equipes) AS equipes,
                   (SELECT COUNT(*) FROM competicoes) AS competicoes,
                   (SELECT COUNT(*) FROM inscricoes) AS inscricoes
            "#,
        )
        .fetch_one(self.pool)
        .await?;

        Ok(totals)
    }

    /// Athletes grouped by team reference, largest group first.
    ///
    /// Athletes without a team form their own group with a null reference;
    /// teams with no athletes do not appear.
    pub async fn athletes_per_team(&self) -> Result<Vec<TeamAthleteCount>> {
        let rows = sqlx::query_as::<_, TeamAthleteCount>(
            r#"
            SELECT a.id_equipe,
                   COUNT(*) AS count,
                   MAX(e.nome) AS equipe_nome
            FROM atletas a
            LEFT JOIN equipes e ON e.id::text = a.id_equipe
            GROUP BY a.id_equipe
            ORDER BY COUNT(*) DESC, a.id_equipe
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}
