use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::common::validate_non_negative;
use crate::models::CompetitionWithCount;

/// Competition payload, used for creation and for the full-replace update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompetitionRequest {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(length(min = 1, message = "Data de início é obrigatória"))]
    pub data_inicio: String,

    #[validate(length(min = 1, message = "Data de fim é obrigatória"))]
    pub data_fim: String,

    #[validate(length(min = 1, max = 255, message = "Local é obrigatório"))]
    pub local: String,

    pub descricao: Option<String>,

    #[validate(custom(function = "validate_non_negative"))]
    pub valor_inscricao: Decimal,

    #[serde(default)]
    pub permite_dobra: bool,

    #[validate(length(min = 1, message = "Início do período de inscrição é obrigatório"))]
    pub periodo_inscricao_inicio: String,

    #[validate(length(min = 1, message = "Fim do período de inscrição é obrigatório"))]
    pub periodo_inscricao_fim: String,
}

/// Competition with the live number of enrollments referencing it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompetitionResponse {
    #[serde(rename = "_id")]
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
    pub total_inscricoes: i64,
}

impl From<CompetitionWithCount> for CompetitionResponse {
    fn from(row: CompetitionWithCount) -> Self {
        let competition = row.competition;
        Self {
            id: competition.id,
            nome: competition.nome,
            data_inicio: competition.data_inicio,
            data_fim: competition.data_fim,
            local: competition.local,
            descricao: competition.descricao,
            valor_inscricao: competition.valor_inscricao,
            permite_dobra: competition.permite_dobra,
            periodo_inscricao_inicio: competition.periodo_inscricao_inicio,
            periodo_inscricao_fim: competition.periodo_inscricao_fim,
            data_criacao: competition.data_criacao,
            data_atualizacao: competition.data_atualizacao,
            total_inscricoes: row.total_inscricoes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_entry_defaults_to_false() {
        let req: CompetitionRequest = serde_json::from_value(serde_json::json!({
            "nome": "Copa Rio",
            "data_inicio": "2025-05-10",
            "data_fim": "2025-05-11",
            "local": "Niterói",
            "valor_inscricao": 120,
            "periodo_inscricao_inicio": "2025-04-01",
            "periodo_inscricao_fim": "2025-04-30"
        }))
        .unwrap();

        assert!(!req.permite_dobra);
        assert_eq!(req.valor_inscricao, Decimal::new(120, 0));
        assert!(req.validate().is_ok());
    }
}
