use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Enrollment {
    pub id: Uuid,
    pub atleta_id: String,
    pub competicao_id: String,
    pub categorias: Vec<String>,
    pub valor_pago: Decimal,
    pub status: String,
    pub data_inscricao: NaiveDateTime,
}

/// Enrollment joined with the names it points at; "N/A" when a lookup misses.
#[derive(Debug, Clone, FromRow)]
pub struct EnrollmentWithNames {
    #[sqlx(flatten)]
    pub enrollment: Enrollment,
    pub atleta_nome: String,
    pub competicao_nome: String,
}
