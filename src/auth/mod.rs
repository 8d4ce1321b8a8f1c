pub mod claims;
pub mod token;
pub mod verifier;

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::{ConfigError, SecurityConfig};

pub use claims::{authorize, check, Claims};
pub use token::{issue_token, ttl_from_secs, JwtError};
pub use verifier::{JwksVerifier, SecretVerifier, TokenVerifier};

/// Reasons a request fails the permission guard. Every variant maps to 401.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing Authorization header")]
    MissingToken,

    #[error("Invalid Authorization header: {0}")]
    InvalidHeader(&'static str),

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Permission '{0}' not granted")]
    InsufficientPermission(String),

    #[error("Signing keys unavailable: {0}")]
    Unavailable(String),
}

/// Whether the permission guard runs at all. Chosen once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMode {
    Enforced,
    Disabled,
}

/// The verification capability a router is built with.
#[derive(Clone)]
pub enum Authenticator {
    Disabled,
    Enforced(Arc<dyn TokenVerifier>),
}

impl Authenticator {
    pub fn enforced(verifier: impl TokenVerifier + 'static) -> Self {
        Authenticator::Enforced(Arc::new(verifier))
    }

    pub fn mode(&self) -> AuthMode {
        match self {
            Authenticator::Disabled => AuthMode::Disabled,
            Authenticator::Enforced(_) => AuthMode::Enforced,
        }
    }

    /// JWKS takes precedence over a shared secret when both are configured.
    pub fn from_config(security: &SecurityConfig) -> Result<Self, ConfigError> {
        if security.auth_mode() == AuthMode::Disabled {
            return Ok(Authenticator::Disabled);
        }

        let audience = security.audience.as_deref();
        let issuer = security.issuer.as_deref();

        if let Some(jwks_url) = &security.jwks_url {
            let url = url::Url::parse(jwks_url)
                .map_err(|_| ConfigError::InvalidJwksUrl(jwks_url.clone()))?;
            return Ok(Self::enforced(JwksVerifier::new(url, audience, issuer)));
        }

        match &security.jwt_secret {
            Some(secret) if !secret.is_empty() => {
                Ok(Self::enforced(SecretVerifier::new(secret, audience, issuer)))
            }
            _ => Err(ConfigError::MissingVerifier),
        }
    }
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Authenticator({:?})", self.mode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn security() -> SecurityConfig {
        SecurityConfig {
            auth_disabled: false,
            jwt_secret: None,
            jwks_url: None,
            audience: None,
            issuer: None,
            token_ttl_secs: 3600,
        }
    }

    #[test]
    fn disabled_switch_wins_over_verifier_settings() {
        let mut config = security();
        config.auth_disabled = true;
        config.jwt_secret = Some("secret".into());
        let auth = Authenticator::from_config(&config).unwrap();
        assert_eq!(auth.mode(), AuthMode::Disabled);
    }

    #[test]
    fn enforced_without_verifier_is_a_config_error() {
        let err = Authenticator::from_config(&security()).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVerifier));
    }

    #[test]
    fn secret_enables_enforcement() {
        let mut config = security();
        config.jwt_secret = Some("secret".into());
        let auth = Authenticator::from_config(&config).unwrap();
        assert_eq!(auth.mode(), AuthMode::Enforced);
    }

    #[test]
    fn rejects_malformed_jwks_url() {
        let mut config = security();
        config.jwks_url = Some("not a url".into());
        let err = Authenticator::from_config(&config).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidJwksUrl(_)));
    }
}
