use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, FromRow)]
pub struct Athlete {
    pub id: Uuid,
    pub nome: String,
    pub cpf: String,
    pub sexo: String,
    pub email: String,
    pub telefone: Option<String>,
    pub data_nascimento: Option<String>,
    pub data_filiacao: String,
    pub data_desfiliacao: Option<String>,
    pub peso: Option<Decimal>,
    pub altura: Option<Decimal>,
    pub maior_total: Option<Decimal>,
    pub status: String,
    pub id_categoria: Option<String>,
    pub id_equipe: Option<String>,
    pub endereco: Option<String>,
    pub observacoes: Option<String>,
    pub matricula: String,
    pub data_criacao: NaiveDateTime,
    pub data_atualizacao: Option<NaiveDateTime>,
}

/// Athlete row joined with the name of the team it references, if any.
#[derive(Debug, Clone, FromRow)]
pub struct AthleteWithTeam {
    #[sqlx(flatten)]
    pub athlete: Athlete,
    pub nome_equipe: Option<String>,
}
