use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{DashboardTotals, TeamAthleteCount};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DashboardResponse {
    pub totais: TotalsResponse,
    pub atletas_por_equipe: Vec<TeamAthleteCountResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TotalsResponse {
    pub atletas: i64,
    pub equipes: i64,
    pub competicoes: i64,
    pub inscricoes: i64,
}

/// Number of athletes grouped by the team they reference (`_id` is that reference)
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeamAthleteCountResponse {
    #[serde(rename = "_id")]
    pub id_equipe: Option<String>,
    pub count: i64,
    pub equipe_nome: Option<String>,
}

impl From<DashboardTotals> for TotalsResponse {
    fn from(totals: DashboardTotals) -> Self {
        Self {
            atletas: totals.atletas,
            equipes: totals.equipes,
            competicoes: totals.competicoes,
            inscricoes: totals.inscricoes,
        }
    }
}

impl From<TeamAthleteCount> for TeamAthleteCountResponse {
    fn from(row: TeamAthleteCount) -> Self {
        Self {
            id_equipe: row.id_equipe,
            count: row.count,
            equipe_nome: row.equipe_nome,
        }
    }
}
