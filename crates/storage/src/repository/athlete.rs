use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::athlete::{AthleteRequest, cpf_digits};
use crate::error::{Result, StorageError};
use crate::models::AthleteWithTeam;
use crate::services::integrity::DUPLICATE_CPF;

const SELECT_WITH_TEAM: &str = r#"
    SELECT a.*, e.nome AS nome_equipe
    FROM atletas a
    LEFT JOIN equipes e ON e.id::text = a.id_equipe
"#;

pub struct AthleteRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> AthleteRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all athletes with their team name resolved
    pub async fn list(&self) -> Result<Vec<AthleteWithTeam>> {
        let athletes = sqlx::query_as::<_, AthleteWithTeam>(&format!(
            "{SELECT_WITH_TEAM} ORDER BY a.data_criacao, a.id"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    /// List the athletes referencing the given team
    pub async fn list_by_team(&self, team_id: Uuid) -> Result<Vec<AthleteWithTeam>> {
        let athletes = sqlx::query_as::<_, AthleteWithTeam>(&format!(
            "{SELECT_WITH_TEAM} WHERE a.id_equipe = $1 ORDER BY a.nome"
        ))
        .bind(team_id.to_string())
        .fetch_all(self.pool)
        .await?;

        Ok(athletes)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<AthleteWithTeam> {
        let athlete = sqlx::query_as::<_, AthleteWithTeam>(&format!(
            "{SELECT_WITH_TEAM} WHERE a.id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Find an athlete by CPF, formatted or digits only
    pub async fn find_by_cpf(&self, cpf: &str) -> Result<AthleteWithTeam> {
        let digits = cpf_digits(cpf);
        if digits.is_empty() {
            return Err(StorageError::NotFound);
        }

        let athlete = sqlx::query_as::<_, AthleteWithTeam>(&format!(
            "{SELECT_WITH_TEAM} WHERE a.cpf = $1"
        ))
        .bind(digits)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    /// Whether an athlete with the same CPF digits is already stored
    pub async fn exists_by_cpf(&self, cpf: &str) -> Result<bool> {
        let exists =
            sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM atletas WHERE cpf = $1)")
                .bind(cpf_digits(cpf))
                .fetch_one(self.pool)
                .await?;

        Ok(exists)
    }

    /// Number of athletes whose team reference points at `team_id`
    pub async fn count_by_team(&self, team_id: Uuid) -> Result<i64> {
        let count =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM atletas WHERE id_equipe = $1")
                .bind(team_id.to_string())
                .fetch_one(self.pool)
                .await?;

        Ok(count)
    }

    /// Insert a new athlete with an already generated registration number
    pub async fn create(&self, req: &AthleteRequest, matricula: &str) -> Result<Uuid> {
        let id = sqlx::query_scalar::<_, Uuid>(
            r#"
            INSERT INTO atletas (nome, cpf, sexo, email, telefone, data_nascimento,
                                 data_filiacao, data_desfiliacao, peso, altura, maior_total,
                                 status, id_categoria, id_equipe, endereco, observacoes, matricula)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            RETURNING id
            "#,
        )
        .bind(&req.nome)
        .bind(cpf_digits(&req.cpf))
        .bind(&req.sexo)
        .bind(&req.email)
        .bind(&req.telefone)
        .bind(&req.data_nascimento)
        .bind(&req.data_filiacao)
        .bind(&req.data_desfiliacao)
        .bind(req.peso)
        .bind(req.altura)
        .bind(req.maior_total)
        .bind(&req.status)
        .bind(&req.id_categoria)
        .bind(&req.id_equipe)
        .bind(&req.endereco)
        .bind(&req.observacoes)
        .bind(matricula)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_CPF))?;

        Ok(id)
    }

    /// Replace every mutable field; the registration number is left untouched
    pub async fn update(&self, id: Uuid, req: &AthleteRequest) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE atletas
            SET nome = $2,
                cpf = $3,
                sexo = $4,
                email = $5,
                telefone = $6,
                data_nascimento = $7,
                data_filiacao = $8,
                data_desfiliacao = $9,
                peso = $10,
                altura = $11,
                maior_total = $12,
                status = $13,
                id_categoria = $14,
                id_equipe = $15,
                endereco = $16,
                observacoes = $17,
                data_atualizacao = (NOW() AT TIME ZONE 'utc')
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(&req.nome)
        .bind(cpf_digits(&req.cpf))
        .bind(&req.sexo)
        .bind(&req.email)
        .bind(&req.telefone)
        .bind(&req.data_nascimento)
        .bind(&req.data_filiacao)
        .bind(&req.data_desfiliacao)
        .bind(req.peso)
        .bind(req.altura)
        .bind(req.maior_total)
        .bind(&req.status)
        .bind(&req.id_categoria)
        .bind(&req.id_equipe)
        .bind(&req.endereco)
        .bind(&req.observacoes)
        .execute(self.pool)
        .await
        .map_err(|e| StorageError::from(e).on_unique_violation(DUPLICATE_CPF))?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM atletas WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
