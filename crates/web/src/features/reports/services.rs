use feperj_storage::{
    dto::report::{DashboardResponse, TeamAthleteCountResponse},
    error::Result,
    repository::report::ReportRepository,
};
use sqlx::PgPool;

/// Collection totals plus athletes grouped by team
pub async fn dashboard(pool: &PgPool) -> Result<DashboardResponse> {
    let repo = ReportRepository::new(pool);

    let totals = repo.totals().await?;
    let per_team = repo.athletes_per_team().await?;

    Ok(DashboardResponse {
        totais: totals.into(),
        atletas_por_equipe: per_team
            .into_iter()
            .map(TeamAthleteCountResponse::from)
            .collect(),
    })
}
