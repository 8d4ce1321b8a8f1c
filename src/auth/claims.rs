use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{AuthError, AuthMode};

/// Claims carried by a verified bearer token. `permissions` is mandatory;
/// a token without it fails verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    pub permissions: BTreeSet<String>,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
}

impl Claims {
    pub fn new<I, S>(sub: Option<String>, permissions: I, exp: i64) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sub,
            permissions: permissions.into_iter().map(Into::into).collect(),
            exp,
            iat: None,
        }
    }
}

/// True iff `required` is one of the granted permissions.
pub fn authorize(claims: &Claims, required: &str) -> bool {
    claims.permissions.contains(required)
}

/// The guard decision for one request. `claims` is `None` when no token was
/// presented.
pub fn check(mode: AuthMode, claims: Option<&Claims>, required: &str) -> Result<(), AuthError> {
    match mode {
        AuthMode::Disabled => Ok(()),
        AuthMode::Enforced => {
            let claims = claims.ok_or(AuthError::MissingToken)?;
            if authorize(claims, required) {
                Ok(())
            } else {
                Err(AuthError::InsufficientPermission(required.to_string()))
            }
        }
    }
}
