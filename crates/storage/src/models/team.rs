use chrono::NaiveDateTime;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Team {
    pub id: Uuid,
    pub nome: String,
    pub cidade: String,
    pub estado: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub responsavel: Option<String>,
    pub data_criacao: NaiveDateTime,
    pub data_atualizacao: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromRow)]
pub struct TeamWithCount {
    #[sqlx(flatten)]
    pub team: Team,
    pub total_atletas: i64,
}
