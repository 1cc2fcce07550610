use feperj_storage::{
    dto::team::TeamRequest,
    error::{Result, StorageError},
    models::{AthleteWithTeam, TeamWithCount},
    repository::{athlete::AthleteRepository, team::TeamRepository},
    services::integrity,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List all teams
pub async fn list_teams(pool: &PgPool) -> Result<Vec<TeamWithCount>> {
    let repo = TeamRepository::new(pool);
    repo.list().await
}

/// Get team by ID
pub async fn get_team(pool: &PgPool, id: Uuid) -> Result<TeamWithCount> {
    let repo = TeamRepository::new(pool);
    repo.find_by_id(id).await
}

/// Athletes referencing a team; the team itself must exist
pub async fn list_team_athletes(pool: &PgPool, id: Uuid) -> Result<Vec<AthleteWithTeam>> {
    if !TeamRepository::new(pool).exists(id).await? {
        return Err(StorageError::NotFound);
    }

    AthleteRepository::new(pool).list_by_team(id).await
}

/// Create a new team
pub async fn create_team(pool: &PgPool, request: &TeamRequest) -> Result<Uuid> {
    integrity::ensure_team_name_available(pool, &request.nome).await?;

    let repo = TeamRepository::new(pool);
    repo.create(request).await
}

/// Replace a team's data
pub async fn update_team(pool: &PgPool, id: Uuid, request: &TeamRequest) -> Result<()> {
    let repo = TeamRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a team that no athlete references
pub async fn delete_team(pool: &PgPool, id: Uuid) -> Result<()> {
    integrity::ensure_team_has_no_athletes(pool, id).await?;

    let repo = TeamRepository::new(pool);
    repo.delete(id).await
}
