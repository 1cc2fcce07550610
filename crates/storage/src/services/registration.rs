//! Athlete registration numbers ("matrícula").
//!
//! Format: `FEP` + local timestamp `YYYYMMDDHHMMSS` + last four digits of the
//! CPF. Two athletes created in the same second whose CPFs end in the same
//! four digits get the same number; it is informational and never used for
//! lookups, so no uniqueness is enforced on it.

use chrono::{Local, NaiveDateTime};

use crate::dto::athlete::cpf_digits;

pub const REGISTRATION_PREFIX: &str = "FEP";

/// Registration number for `cpf` stamped with the current local time
pub fn generate_registration_number(cpf: &str) -> String {
    registration_number_at(cpf, Local::now().naive_local())
}

pub fn registration_number_at(cpf: &str, at: NaiveDateTime) -> String {
    let digits = cpf_digits(cpf);
    let last_four = &digits[digits.len().saturating_sub(4)..];

    format!(
        "{REGISTRATION_PREFIX}{}{last_four}",
        at.format("%Y%m%d%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, 5)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_formatted_cpf() {
        assert_eq!(
            registration_number_at("123.456.789-09", at(14, 3, 9)),
            "FEP202407051403098909"
        );
    }

    #[test]
    fn test_short_cpf_uses_all_digits() {
        assert_eq!(registration_number_at("1-2", at(0, 0, 0)), "FEP2024070500000012");
        assert_eq!(registration_number_at("", at(0, 0, 0)), "FEP20240705000000");
    }

    #[test]
    fn test_one_second_apart_differs_only_in_timestamp() {
        let first = registration_number_at("98765432100", at(9, 59, 59));
        let second = registration_number_at("98765432100", at(10, 0, 0));

        assert_ne!(first, second);
        assert_eq!(&first[..3], &second[..3]);
        assert_eq!(&first[first.len() - 4..], "2100");
        assert_eq!(&second[second.len() - 4..], "2100");
        assert_eq!(&first[3..17], "20240705095959");
        assert_eq!(&second[3..17], "20240705100000");
    }

    #[test]
    fn test_current_time_has_fixed_length() {
        let number = generate_registration_number("111.222.333-44");
        assert!(number.starts_with(REGISTRATION_PREFIX));
        assert_eq!(number.len(), 3 + 14 + 4);
        assert!(number[3..].chars().all(|c| c.is_ascii_digit()));
    }
}
