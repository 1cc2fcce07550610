use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Returned by every create endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub message: String,
}

impl CreatedResponse {
    pub fn new(id: Uuid, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Optional references arrive as `""` from the client forms; treat them as absent.
pub(crate) fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

pub(crate) fn validate_non_negative(value: &Decimal) -> Result<(), validator::ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        let mut error = validator::ValidationError::new("negative_value");
        error.message = Some("Value must not be negative".into());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Reference {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        id_equipe: Option<String>,
    }

    #[test]
    fn test_empty_reference_is_none() {
        let parsed: Reference = serde_json::from_str(r#"{"id_equipe": ""}"#).unwrap();
        assert_eq!(parsed.id_equipe, None);

        let parsed: Reference = serde_json::from_str(r#"{"id_equipe": "  "}"#).unwrap();
        assert_eq!(parsed.id_equipe, None);
    }

    #[test]
    fn test_missing_or_null_reference_is_none() {
        let parsed: Reference = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(parsed.id_equipe, None);

        let parsed: Reference = serde_json::from_str(r#"{"id_equipe": null}"#).unwrap();
        assert_eq!(parsed.id_equipe, None);
    }

    #[test]
    fn test_present_reference_is_kept() {
        let parsed: Reference = serde_json::from_str(r#"{"id_equipe": "abc"}"#).unwrap();
        assert_eq!(parsed.id_equipe.as_deref(), Some("abc"));
    }

    #[test]
    fn test_non_negative() {
        assert!(validate_non_negative(&Decimal::new(0, 0)).is_ok());
        assert!(validate_non_negative(&Decimal::new(1500, 2)).is_ok());
        assert!(validate_non_negative(&Decimal::new(-1, 0)).is_err());
    }
}
