use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct DashboardTotals {
    pub atletas: i64,
    pub equipes: i64,
    pub competicoes: i64,
    pub inscricoes: i64,
}

#[derive(Debug, Clone, FromRow)]
pub struct TeamAthleteCount {
    pub id_equipe: Option<String>,
    pub count: i64,
    pub equipe_nome: Option<String>,
}
