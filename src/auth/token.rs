use chrono::{Duration, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use thiserror::Error;

use super::Claims;

#[derive(Debug, Error)]
pub enum JwtError {
    #[error("JWT generation error: {0}")]
    TokenGeneration(String),

    #[error("Invalid JWT secret")]
    InvalidSecret,

    #[error("Token lifetime of {0} seconds is out of range")]
    InvalidTtl(u64),
}

/// Lifetime in whole seconds, rejecting values chrono cannot represent
pub fn ttl_from_secs(secs: u64) -> Result<Duration, JwtError> {
    i64::try_from(secs)
        .ok()
        .and_then(Duration::try_seconds)
        .ok_or(JwtError::InvalidTtl(secs))
}

/// Mint an HS256 token granting `permissions`, for local use against a
/// server configured with the same shared secret.
pub fn issue_token(
    secret: &str,
    subject: Option<String>,
    permissions: &[String],
    ttl: Duration,
) -> Result<String, JwtError> {
    if secret.is_empty() {
        return Err(JwtError::InvalidSecret);
    }

    let now = Utc::now();
    let exp = now
        .checked_add_signed(ttl)
        .ok_or_else(|| JwtError::InvalidTtl(ttl.num_seconds().unsigned_abs()))?;
    let mut claims = Claims::new(subject, permissions.iter().cloned(), exp.timestamp());
    claims.iat = Some(now.timestamp());

    let encoding_key = EncodingKey::from_secret(secret.as_bytes());
    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| JwtError::TokenGeneration(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refuses_empty_secret() {
        let err = issue_token("", None, &[], Duration::hours(1)).unwrap_err();
        assert!(matches!(err, JwtError::InvalidSecret));
    }

    #[test]
    fn oversized_ttl_is_an_error() {
        assert!(matches!(ttl_from_secs(u64::MAX), Err(JwtError::InvalidTtl(_))));

        let ttl = ttl_from_secs(10_000_000_000_000).unwrap();
        let err = issue_token("s3cret", None, &[], ttl).unwrap_err();
        assert!(matches!(err, JwtError::InvalidTtl(10_000_000_000_000)));
    }

    #[test]
    fn produces_three_segment_jwt() {
        let token = issue_token("s3cret", Some("cli".into()), &["get:teams".into()], Duration::hours(1))
            .unwrap();
        assert_eq!(token.split('.').count(), 3);
    }
}
