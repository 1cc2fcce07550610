use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::{empty_string_as_none, validate_non_negative};
use crate::models::AthleteWithTeam;

pub const DEFAULT_ATHLETE_STATUS: &str = "ATIVO";

fn default_status() -> String {
    DEFAULT_ATHLETE_STATUS.to_string()
}

/// CPF reduced to its digits, the form it is stored and compared in.
/// `"123.456.789-09"` and `"12345678909"` name the same person.
pub fn cpf_digits(cpf: &str) -> String {
    cpf.chars().filter(char::is_ascii_digit).collect()
}

fn validate_cpf_digits(cpf: &str) -> Result<(), validator::ValidationError> {
    if cpf.chars().any(|c| c.is_ascii_digit()) {
        return Ok(());
    }

    let mut error = validator::ValidationError::new("cpf_without_digits");
    error.message = Some("CPF deve conter dígitos".into());
    Err(error)
}

/// Athlete payload, used for creation and for the full-replace update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AthleteRequest {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(
        length(min = 1, max = 32, message = "CPF é obrigatório"),
        custom(function = "validate_cpf_digits")
    )]
    pub cpf: String,

    #[validate(length(min = 1, max = 16, message = "Sexo é obrigatório"))]
    pub sexo: String,

    #[validate(length(min = 1, max = 255, message = "Email é obrigatório"))]
    pub email: String,

    pub telefone: Option<String>,
    pub data_nascimento: Option<String>,

    #[validate(length(min = 1, message = "Data de filiação é obrigatória"))]
    pub data_filiacao: String,

    pub data_desfiliacao: Option<String>,

    #[validate(custom(function = "validate_non_negative"))]
    pub peso: Option<Decimal>,

    #[validate(custom(function = "validate_non_negative"))]
    pub altura: Option<Decimal>,

    #[validate(custom(function = "validate_non_negative"))]
    pub maior_total: Option<Decimal>,

    #[serde(default = "default_status")]
    #[validate(length(min = 1))]
    pub status: String,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id_categoria: Option<String>,

    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub id_equipe: Option<String>,

    pub endereco: Option<String>,
    pub observacoes: Option<String>,
}

/// Athlete as listed, with the referenced team's name resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AthleteResponse {
    #[serde(rename = "_id")]
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
    pub nome_equipe: Option<String>,
}

impl From<AthleteWithTeam> for AthleteResponse {
    fn from(row: AthleteWithTeam) -> Self {
        let athlete = row.athlete;
        Self {
            id: athlete.id,
            nome: athlete.nome,
            cpf: athlete.cpf,
            sexo: athlete.sexo,
            email: athlete.email,
            telefone: athlete.telefone,
            data_nascimento: athlete.data_nascimento,
            data_filiacao: athlete.data_filiacao,
            data_desfiliacao: athlete.data_desfiliacao,
            peso: athlete.peso,
            altura: athlete.altura,
            maior_total: athlete.maior_total,
            status: athlete.status,
            id_categoria: athlete.id_categoria,
            id_equipe: athlete.id_equipe,
            endereco: athlete.endereco,
            observacoes: athlete.observacoes,
            matricula: athlete.matricula,
            data_criacao: athlete.data_criacao,
            data_atualizacao: athlete.data_atualizacao,
            nome_equipe: row.nome_equipe,
        }
    }
}
