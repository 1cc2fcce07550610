use feperj_storage::{
    dto::athlete::AthleteRequest,
    error::{Result, StorageError},
    models::AthleteWithTeam,
    repository::{athlete::AthleteRepository, team::TeamRepository},
    services::{integrity, registration::generate_registration_number},
};
use sqlx::PgPool;
use uuid::Uuid;

/// List all athletes
pub async fn list_athletes(pool: &PgPool) -> Result<Vec<AthleteWithTeam>> {
    let repo = AthleteRepository::new(pool);
    repo.list().await
}

/// Athletes to export: the whole registry, or one team's roster
pub async fn export_athletes(pool: &PgPool, team: Option<Uuid>) -> Result<Vec<AthleteWithTeam>> {
    let repo = AthleteRepository::new(pool);
    match team {
        Some(team_id) => {
            if !TeamRepository::new(pool).exists(team_id).await? {
                return Err(StorageError::NotFound);
            }
            repo.list_by_team(team_id).await
        }
        None => repo.list().await,
    }
}

/// Get athlete by ID
pub async fn get_athlete(pool: &PgPool, id: Uuid) -> Result<AthleteWithTeam> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_id(id).await
}

/// Get athlete by CPF
pub async fn get_athlete_by_cpf(pool: &PgPool, cpf: &str) -> Result<AthleteWithTeam> {
    let repo = AthleteRepository::new(pool);
    repo.find_by_cpf(cpf).await
}

/// Create a new athlete, assigning its registration number
pub async fn create_athlete(pool: &PgPool, request: &AthleteRequest) -> Result<Uuid> {
    integrity::ensure_cpf_available(pool, &request.cpf).await?;

    let matricula = generate_registration_number(&request.cpf);
    let repo = AthleteRepository::new(pool);
    repo.create(request, &matricula).await
}

/// Replace an athlete's data
pub async fn update_athlete(pool: &PgPool, id: Uuid, request: &AthleteRequest) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.update(id, request).await
}

/// Delete an athlete
pub async fn delete_athlete(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = AthleteRepository::new(pool);
    repo.delete(id).await
}
