//! Signed access tokens.
//!
//! Tokens are HS256 JWTs carrying the username as subject and an absolute
//! expiry. Verification never errors to the caller: any bad signature,
//! malformed token or elapsed expiry yields `None`.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Username of the authenticated account
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub token_ttl_minutes: i64,
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"***")
            .field("token_ttl_minutes", &self.token_ttl_minutes)
            .finish()
    }
}

pub fn issue_token(
    subject: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: subject.to_string(),
        iat: now,
        exp: now + config.token_ttl_minutes * 60,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

pub fn verify_token(token: &str, config: &JwtConfig) -> Option<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .ok()
    .map(|data| data.claims)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> JwtConfig {
        JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        }
    }

    #[test]
    fn test_issue_and_verify() {
        let config = test_config();
        let token = issue_token("15119236790", &config).unwrap();

        let claims = verify_token(&token, &config).expect("fresh token must verify");
        assert_eq!(claims.sub, "15119236790");
        assert_eq!(claims.exp - claims.iat, DEFAULT_TOKEN_TTL_MINUTES * 60);
    }

    #[test]
    fn test_expired_token_fails() {
        let config = test_config();
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: "joana".to_string(),
            iat: now - 600,
            exp: now - 5,
        };
        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(config.secret.as_bytes()),
        )
        .unwrap();

        assert!(verify_token(&token, &config).is_none());
    }

    #[test]
    fn test_other_secret_fails() {
        let token = issue_token("joana", &test_config()).unwrap();
        let other = JwtConfig {
            secret: "another-secret".to_string(),
            token_ttl_minutes: DEFAULT_TOKEN_TTL_MINUTES,
        };

        assert!(verify_token(&token, &other).is_none());
    }

    #[test]
    fn test_garbage_fails() {
        assert!(verify_token("not-a-token", &test_config()).is_none());
        assert!(verify_token("", &test_config()).is_none());
    }

    #[test]
    fn test_debug_hides_secret() {
        let rendered = format!("{:?}", test_config());
        assert!(!rendered.contains("test-secret"));
    }
}
