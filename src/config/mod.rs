use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

use crate::auth::AuthMode;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("authorization is enforced but neither AUTH_JWKS_URL nor AUTH_JWT_SECRET is set")]
    MissingVerifier,

    #[error("AUTH_JWKS_URL is not a valid URL: {0}")]
    InvalidJwksUrl(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub environment: Environment,
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    pub port: u16,
    pub enable_cors: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    /// Process-wide no-auth switch. Read once when the router is built.
    pub auth_disabled: bool,
    pub jwt_secret: Option<String>,
    pub jwks_url: Option<String>,
    pub audience: Option<String>,
    pub issuer: Option<String>,
    pub token_ttl_secs: u64,
}

impl SecurityConfig {
    pub fn auth_mode(&self) -> AuthMode {
        if self.auth_disabled {
            AuthMode::Disabled
        } else {
            AuthMode::Enforced
        }
    }
}

impl DatabaseConfig {
    /// Private in-memory store, fresh on every connect.
    pub fn in_memory() -> Self {
        Self {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source; `from_env` uses the process
    /// environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = match lookup("APP_ENV").as_deref() {
            Some("production") | Some("prod") => Environment::Production,
            _ => Environment::Development,
        };

        match environment {
            Environment::Production => Self::production(),
            Environment::Development => Self::development(),
        }
        .with_overrides(lookup)
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        // Database overrides
        if let Some(v) = lookup("DATABASE_URL") {
            self.database.url = v;
        }
        if let Some(v) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.database.max_connections = v.parse().unwrap_or(self.database.max_connections);
        }

        // API overrides
        if let Some(v) = lookup("HAHIMUR_PORT").or_else(|| lookup("PORT")) {
            self.api.port = v.parse().unwrap_or(self.api.port);
        }
        if let Some(v) = lookup("API_ENABLE_CORS") {
            self.api.enable_cors = v.parse().unwrap_or(self.api.enable_cors);
        }

        // Security overrides
        if let Some(v) = lookup("AUTH_DISABLED") {
            self.security.auth_disabled = v.parse().unwrap_or(self.security.auth_disabled);
        }
        if let Some(v) = lookup("AUTH_JWT_SECRET") {
            self.security.jwt_secret = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = lookup("AUTH_JWKS_URL") {
            self.security.jwks_url = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = lookup("AUTH_AUDIENCE") {
            self.security.audience = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = lookup("AUTH_ISSUER") {
            self.security.issuer = Some(v).filter(|s| !s.is_empty());
        }
        if let Some(v) = lookup("AUTH_TOKEN_TTL_SECS") {
            self.security.token_ttl_secs = v.parse().unwrap_or(self.security.token_ttl_secs);
        }

        self
    }

    fn development() -> Self {
        Self {
            environment: Environment::Development,
            database: DatabaseConfig {
                url: "sqlite://hahimur.db?mode=rwc".to_string(),
                max_connections: 5,
            },
            api: ApiConfig {
                port: 3000,
                enable_cors: true,
            },
            security: SecurityConfig {
                auth_disabled: false,
                jwt_secret: None,
                jwks_url: None,
                audience: None,
                issuer: None,
                token_ttl_secs: 24 * 60 * 60,
            },
        }
    }

    fn production() -> Self {
        Self {
            environment: Environment::Production,
            database: DatabaseConfig {
                url: "sqlite:///var/lib/hahimur/hahimur.db?mode=rwc".to_string(),
                max_connections: 20,
            },
            api: ApiConfig {
                port: 8080,
                enable_cors: false,
            },
            security: SecurityConfig {
                auth_disabled: false,
                jwt_secret: None,
                jwks_url: None,
                audience: None,
                issuer: None,
                token_ttl_secs: 60 * 60,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> AppConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_default_development_config() {
        let config = load(&[]);
        assert_eq!(config.environment, Environment::Development);
        assert_eq!(config.api.port, 3000);
        assert_eq!(config.security.auth_mode(), AuthMode::Enforced);
    }

    #[test]
    fn test_default_production_config() {
        let config = load(&[("APP_ENV", "production")]);
        assert_eq!(config.environment, Environment::Production);
        assert!(!config.api.enable_cors);
        assert_eq!(config.security.token_ttl_secs, 3600);
    }

    #[test]
    fn overrides_apply() {
        let config = load(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("PORT", "9000"),
            ("AUTH_DISABLED", "true"),
            ("AUTH_JWT_SECRET", "shh"),
            ("AUTH_AUDIENCE", ""),
        ]);
        assert_eq!(config.database.url, "sqlite::memory:");
        assert_eq!(config.api.port, 9000);
        assert_eq!(config.security.auth_mode(), AuthMode::Disabled);
        assert_eq!(config.security.jwt_secret.as_deref(), Some("shh"));
        assert_eq!(config.security.audience, None);
    }

    #[test]
    fn unparsable_values_keep_defaults() {
        let config = load(&[("PORT", "eighty"), ("AUTH_DISABLED", "yes please")]);
        assert_eq!(config.api.port, 3000);
        assert!(!config.security.auth_disabled);
    }
}
