use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_non_negative;
use crate::models::EnrollmentWithNames;

pub const DEFAULT_ENROLLMENT_STATUS: &str = "CONFIRMADA";

fn default_status() -> String {
    DEFAULT_ENROLLMENT_STATUS.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct EnrollmentRequest {
    #[validate(length(min = 1, message = "Atleta é obrigatório"))]
    pub atleta_id: String,

    #[validate(length(min = 1, message = "Competição é obrigatória"))]
    pub competicao_id: String,

    #[validate(length(min = 1, message = "Informe ao menos uma categoria"))]
    pub categorias: Vec<String>,

    #[validate(custom(function = "validate_non_negative"))]
    pub valor_pago: Decimal,

    #[serde(default = "default_status")]
    #[validate(length(min = 1))]
    pub status: String,
}

/// Enrollment with the athlete and competition names resolved
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EnrollmentResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub atleta_id: String,
    pub competicao_id: String,
    pub categorias: Vec<String>,
    pub valor_pago: Decimal,
    pub status: String,
    pub data_inscricao: NaiveDateTime,
    pub atleta_nome: String,
    pub competicao_nome: String,
}

impl From<EnrollmentWithNames> for EnrollmentResponse {
    fn from(row: EnrollmentWithNames) -> Self {
        let enrollment = row.enrollment;
        Self {
            id: enrollment.id,
            atleta_id: enrollment.atleta_id,
            competicao_id: enrollment.competicao_id,
            categorias: enrollment.categorias,
            valor_pago: enrollment.valor_pago,
            status: enrollment.status,
            data_inscricao: enrollment.data_inscricao,
            atleta_nome: row.atleta_nome,
            competicao_nome: row.competicao_nome,
        }
    }
}
