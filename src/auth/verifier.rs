use std::collections::HashMap;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, Validation};
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};
use url::Url;

use super::{AuthError, Claims};

/// Checks a bearer token's signature, expiry and claim shape.
#[async_trait]
pub trait TokenVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError>;
}

fn validation(algorithm: Algorithm, audience: Option<&str>, issuer: Option<&str>) -> Validation {
    let mut validation = Validation::new(algorithm);
    match audience {
        Some(aud) => validation.set_audience(&[aud]),
        None => validation.validate_aud = false,
    }
    if let Some(iss) = issuer {
        validation.set_issuer(&[iss]);
    }
    validation
}

fn decode_claims(token: &str, key: &DecodingKey, validation: &Validation) -> Result<Claims, AuthError> {
    decode::<Claims>(token, key, validation)
        .map(|data| data.claims)
        .map_err(|e| AuthError::InvalidToken(e.to_string()))
}

/// HS256 tokens signed with a shared secret.
pub struct SecretVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl SecretVerifier {
    pub fn new(secret: &str, audience: Option<&str>, issuer: Option<&str>) -> Self {
        Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation: validation(Algorithm::HS256, audience, issuer),
        }
    }
}

#[async_trait]
impl TokenVerifier for SecretVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        decode_claims(token, &self.key, &self.validation)
    }
}

/// Shortest gap between two JWKS fetches triggered by unknown `kid`s
pub const DEFAULT_MIN_REFRESH_INTERVAL: Duration = Duration::from_secs(60);

struct KeyCache {
    keys: HashMap<String, DecodingKey>,
    fetched_at: Option<Instant>,
}

/// RS256 tokens signed by an authority publishing its keys as a JWKS document.
/// Keys are cached by `kid`. An unknown `kid` refetches the document at most
/// once per `min_refresh_interval`; inside that window it is rejected outright.
pub struct JwksVerifier {
    url: Url,
    client: reqwest::Client,
    validation: Validation,
    min_refresh_interval: Duration,
    cache: RwLock<KeyCache>,
    refresh_lock: Mutex<()>,
}

impl JwksVerifier {
    pub fn new(url: Url, audience: Option<&str>, issuer: Option<&str>) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
            validation: validation(Algorithm::RS256, audience, issuer),
            min_refresh_interval: DEFAULT_MIN_REFRESH_INTERVAL,
            cache: RwLock::new(KeyCache {
                keys: HashMap::new(),
                fetched_at: None,
            }),
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn with_min_refresh_interval(mut self, interval: Duration) -> Self {
        self.min_refresh_interval = interval;
        self
    }

    async fn key_for(&self, kid: &str) -> Result<DecodingKey, AuthError> {
        if let Some(key) = self.cache.read().await.keys.get(kid) {
            return Ok(key.clone());
        }

        // One fetch at a time; waiters re-check what the winner loaded
        let _refreshing = self.refresh_lock.lock().await;
        {
            let cache = self.cache.read().await;
            if let Some(key) = cache.keys.get(kid) {
                return Ok(key.clone());
            }
            let throttled = cache
                .fetched_at
                .is_some_and(|at| at.elapsed() < self.min_refresh_interval);
            if throttled {
                return Err(unknown_key(kid));
            }
        }

        self.refresh().await?;
        self.cache
            .read()
            .await
            .keys
            .get(kid)
            .cloned()
            .ok_or_else(|| unknown_key(kid))
    }

    /// Failed fetches still start the throttle window and keep the old keys.
    async fn refresh(&self) -> Result<(), AuthError> {
        let fetched = self.fetch().await;
        let mut cache = self.cache.write().await;
        cache.fetched_at = Some(Instant::now());
        cache.keys = fetched?;
        info!("Loaded {} signing keys from {}", cache.keys.len(), self.url);
        Ok(())
    }

    async fn fetch(&self) -> Result<HashMap<String, DecodingKey>, AuthError> {
        let jwks: JwkSet = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
            .map_err(|e| AuthError::Unavailable(e.to_string()))?
            .json()
            .await
            .map_err(|e| AuthError::Unavailable(e.to_string()))?;

        let mut keys = HashMap::new();
        for jwk in &jwks.keys {
            let Some(kid) = jwk.common.key_id.clone() else {
                continue;
            };
            match DecodingKey::from_jwk(jwk) {
                Ok(key) => {
                    keys.insert(kid, key);
                }
                Err(e) => warn!("Skipping unusable JWKS key {}: {}", kid, e),
            }
        }
        Ok(keys)
    }
}

fn unknown_key(kid: &str) -> AuthError {
    AuthError::InvalidToken(format!("unknown signing key {}", kid))
}

#[async_trait]
impl TokenVerifier for JwksVerifier {
    async fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let header = decode_header(token).map_err(|e| AuthError::InvalidToken(e.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::InvalidToken("token header has no kid".to_string()))?;

        let key = self.key_for(&kid).await?;
        decode_claims(token, &key, &self.validation)
    }
}
