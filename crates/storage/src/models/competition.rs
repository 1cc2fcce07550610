use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Competition {
    pub id: Uuid,
    pub nome: String,
    pub data_inicio: String,
    pub data_fim: String,
    pub local: String,
    pub descricao: Option<String>,
    pub valor_inscricao: Decimal,
    pub permite_dobra: bool,
    pub periodo_inscricao_inicio: String,
    pub periodo_inscricao_fim: String,
    pub data_criacao: NaiveDateTime,
    pub data_atualizacao: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, FromRow)]
pub struct CompetitionWithCount {
    #[sqlx(flatten)]
    pub competition: Competition,
    pub total_inscricoes: i64,
}
