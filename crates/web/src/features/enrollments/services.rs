use feperj_storage::{
    dto::enrollment::EnrollmentRequest, error::Result, models::EnrollmentWithNames,
    repository::enrollment::EnrollmentRepository,
};
use sqlx::PgPool;
use uuid::Uuid;

/// List all enrollments
pub async fn list_enrollments(pool: &PgPool) -> Result<Vec<EnrollmentWithNames>> {
    let repo = EnrollmentRepository::new(pool);
    repo.list().await
}

/// Create an enrollment; references are not checked
pub async fn create_enrollment(pool: &PgPool, request: &EnrollmentRequest) -> Result<Uuid> {
    let repo = EnrollmentRepository::new(pool);
    repo.create(request).await
}

/// Cancel (delete) an enrollment
pub async fn cancel_enrollment(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = EnrollmentRepository::new(pool);
    repo.delete(id).await
}
