use feperj_storage::{
    dto::competition::CompetitionRequest,
    error::Result,
    models::CompetitionWithCount,
    repository::competition::CompetitionRepository,
    services::integrity,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List all competitions
pub async fn list_competitions(pool: &PgPool) -> Result<Vec<CompetitionWithCount>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

/// Get competition by ID
pub async fn get_competition(pool: &PgPool, id: Uuid) -> Result<CompetitionWithCount> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_id(id).await
}

/// Create a new competition
pub async fn create_competition(pool: &PgPool, request: &CompetitionRequest) -> Result<Uuid> {
    let repo = CompetitionRepository::new(pool);
    repo.create(request).await
}

/// Update a competition
pub async fn update_competition(
    pool: &PgPool,
    id: Uuid,
    request: &CompetitionRequest,
) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    repo.update(id, request).await
}

/// Delete a competition that no enrollment references
pub async fn delete_competition(pool: &PgPool, id: Uuid) -> Result<()> {
    integrity::ensure_competition_has_no_enrollments(pool, id).await?;

    let repo = CompetitionRepository::new(pool);
    repo.delete(id).await
}
