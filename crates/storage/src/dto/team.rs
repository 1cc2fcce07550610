use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::athlete::AthleteResponse;
use crate::models::TeamWithCount;

/// Team payload, used for creation and for the full-replace update
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TeamRequest {
    #[validate(length(min = 1, max = 255, message = "Nome é obrigatório"))]
    pub nome: String,

    #[validate(length(min = 1, max = 255, message = "Cidade é obrigatória"))]
    pub cidade: String,

    #[validate(length(min = 1, max = 64, message = "Estado é obrigatório"))]
    pub estado: String,

    pub telefone: Option<String>,
    pub email: Option<String>,
    pub responsavel: Option<String>,
}

/// Team with the live number of athletes referencing it
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub nome: String,
    pub cidade: String,
    pub estado: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub responsavel: Option<String>,
    pub data_criacao: NaiveDateTime,
    pub data_atualizacao: Option<NaiveDateTime>,
    pub total_atletas: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamAthletesResponse {
    pub atletas: Vec<AthleteResponse>,
    pub total: usize,
}

impl From<TeamWithCount> for TeamResponse {
    fn from(row: TeamWithCount) -> Self {
        let team = row.team;
        Self {
            id: team.id,
            nome: team.nome,
            cidade: team.cidade,
            estado: team.estado,
            telefone: team.telefone,
            email: team.email,
            responsavel: team.responsavel,
            data_criacao: team.data_criacao,
            data_atualizacao: team.data_atualizacao,
            total_atletas: row.total_atletas,
        }
    }
}

impl From<Vec<AthleteResponse>> for TeamAthletesResponse {
    fn from(atletas: Vec<AthleteResponse>) -> Self {
        let total = atletas.len();
        Self { atletas, total }
    }
}
