//! Spreadsheet-ready CSV of the athlete registry.

use feperj_storage::models::AthleteWithTeam;

pub const EXPORT_COLUMNS: [&str; 13] = [
    "Nome",
    "CPF",
    "Matrícula",
    "Sexo",
    "Email",
    "Telefone",
    "Data de Nascimento",
    "Data de Filiação",
    "Equipe",
    "Status",
    "Maior Total (kg)",
    "Endereço",
    "Observações",
];

const MISSING: &str = "N/A";
const NO_TEAM: &str = "Sem Equipe";

fn or_missing(value: Option<&str>) -> &str {
    value.filter(|v| !v.is_empty()).unwrap_or(MISSING)
}

/// One header row, then one row per athlete in the given order.
pub fn athletes_csv(athletes: &[AthleteWithTeam]) -> Result<Vec<u8>, csv::Error> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(EXPORT_COLUMNS)?;

    for row in athletes {
        let athlete = &row.athlete;
        let maior_total = athlete
            .maior_total
            .map(|total| total.to_string())
            .unwrap_or_else(|| MISSING.to_string());

        writer.write_record([
            athlete.nome.as_str(),
            athlete.cpf.as_str(),
            athlete.matricula.as_str(),
            athlete.sexo.as_str(),
            athlete.email.as_str(),
            or_missing(athlete.telefone.as_deref()),
            or_missing(athlete.data_nascimento.as_deref()),
            athlete.data_filiacao.as_str(),
            row.nome_equipe.as_deref().unwrap_or(NO_TEAM),
            athlete.status.as_str(),
            maior_total.as_str(),
            or_missing(athlete.endereco.as_deref()),
            or_missing(athlete.observacoes.as_deref()),
        ])?;
    }

    writer
        .into_inner()
        .map_err(|e| csv::Error::from(e.into_error()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use feperj_storage::models::Athlete;
    use uuid::Uuid;

    fn athlete(nome: &str, cpf: &str, nome_equipe: Option<&str>) -> AthleteWithTeam {
        AthleteWithTeam {
            athlete: Athlete {
                id: Uuid::new_v4(),
                nome: nome.to_string(),
                cpf: cpf.to_string(),
                sexo: "F".to_string(),
                email: "atleta@example.com".to_string(),
                telefone: None,
                data_nascimento: Some("1998-04-02".to_string()),
                data_filiacao: "2024-01-15".to_string(),
                data_desfiliacao: None,
                peso: None,
                altura: None,
                maior_total: Some("412.5".parse().unwrap()),
                status: "ATIVO".to_string(),
                id_categoria: None,
                id_equipe: None,
                endereco: Some(String::new()),
                observacoes: None,
                matricula: "FEP202401150930001234".to_string(),
                data_criacao: NaiveDate::from_ymd_opt(2024, 1, 15)
                    .unwrap()
                    .and_hms_opt(9, 30, 0)
                    .unwrap(),
                data_atualizacao: None,
            },
            nome_equipe: nome_equipe.map(str::to_string),
        }
    }

    fn rows(bytes: &[u8]) -> Vec<Vec<String>> {
        csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(bytes)
            .records()
            .map(|record| record.unwrap().iter().map(str::to_string).collect())
            .collect()
    }

    #[test]
    fn test_empty_registry_has_only_header() {
        let bytes = athletes_csv(&[]).unwrap();

        let rows = rows(&bytes);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0], EXPORT_COLUMNS);
    }

    #[test]
    fn test_athlete_row_with_fallbacks() {
        let bytes = athletes_csv(&[athlete("Maria Lima", "98765432100", None)]).unwrap();

        let rows = rows(&bytes);
        let row = &rows[1];
        assert_eq!(row[0], "Maria Lima");
        assert_eq!(row[1], "98765432100");
        assert_eq!(row[2], "FEP202401150930001234");
        assert_eq!(row[5], "N/A");
        assert_eq!(row[6], "1998-04-02");
        assert_eq!(row[8], "Sem Equipe");
        assert_eq!(row[10], "412.5");
        assert_eq!(row[11], "N/A");
        assert_eq!(row[12], "N/A");
    }

    #[test]
    fn test_fields_with_separators_are_quoted() {
        let bytes =
            athletes_csv(&[athlete("Silva, Ana \"Aninha\"", "11122233344", Some("Rio Forca"))])
                .unwrap();

        let rows = rows(&bytes);
        assert_eq!(rows[1][0], "Silva, Ana \"Aninha\"");
        assert_eq!(rows[1][8], "Rio Forca");
    }
}
