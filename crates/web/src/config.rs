use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use crate::auth::jwt::{DEFAULT_TOKEN_TTL_MINUTES, JwtConfig};

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub jwt: JwtConfig,
    /// Account created by `POST /setup-admin`; the endpoint is disabled without it.
    pub admin: Option<AdminCredentials>,
    /// Client UI served at `/` when set
    pub static_dir: Option<PathBuf>,
}

#[derive(Clone)]
pub struct AdminCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let secret = lookup("JWT_SECRET").context("Cannot load JWT_SECRET env variable")?;
        if secret.trim().is_empty() {
            bail!("JWT_SECRET must not be empty");
        }

        let token_ttl_minutes = match lookup("TOKEN_TTL_MINUTES") {
            Some(value) => value
                .parse()
                .context("TOKEN_TTL_MINUTES must be a number")?,
            None => DEFAULT_TOKEN_TTL_MINUTES,
        };

        let admin = match (lookup("ADMIN_USERNAME"), lookup("ADMIN_PASSWORD")) {
            (Some(username), Some(password)) if !username.is_empty() && !password.is_empty() => {
                Some(AdminCredentials { username, password })
            }
            _ => None,
        };

        Ok(Self {
            host: lookup("HOST").context("Cannot load HOST env variable")?,
            port: lookup("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: lookup("DATABASE_URL").context("Cannot load DATABASE_URL env variable")?,
            jwt: JwtConfig {
                secret,
                token_ttl_minutes,
            },
            admin,
            static_dir: lookup("STATIC_DIR")
                .filter(|dir| !dir.is_empty())
                .map(PathBuf::from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    const BASE: &[(&str, &str)] = &[
        ("HOST", "0.0.0.0"),
        ("PORT", "8000"),
        ("DATABASE_URL", "postgres://localhost/feperj"),
        ("JWT_SECRET", "s3cret"),
    ];

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(BASE)).unwrap();

        assert_eq!(config.port, 8000);
        assert_eq!(config.jwt.token_ttl_minutes, 30);
        assert!(config.admin.is_none());
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_admin_requires_both_variables() {
        let mut vars = BASE.to_vec();
        vars.push(("ADMIN_USERNAME", "admin"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert!(config.admin.is_none());

        vars.push(("ADMIN_PASSWORD", "troque-me"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        let admin = config.admin.unwrap();
        assert_eq!(admin.username, "admin");
        assert!(!format!("{admin:?}").contains("troque-me"));
    }

    #[test]
    fn test_missing_secret_fails() {
        let vars: Vec<_> = BASE
            .iter()
            .copied()
            .filter(|(k, _)| *k != "JWT_SECRET")
            .collect();
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());
    }

    #[test]
    fn test_invalid_port_fails() {
        let mut vars: Vec<_> = BASE.iter().copied().filter(|(k, _)| *k != "PORT").collect();
        vars.push(("PORT", "http"));
        assert!(Config::from_lookup(lookup_from(&vars)).is_err());
    }

    #[test]
    fn test_custom_ttl() {
        let mut vars = BASE.to_vec();
        vars.push(("TOKEN_TTL_MINUTES", "5"));
        let config = Config::from_lookup(lookup_from(&vars)).unwrap();
        assert_eq!(config.jwt.token_ttl_minutes, 5);
    }
}
