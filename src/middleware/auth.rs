use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::{self, Next},
    response::Response,
    routing::MethodRouter,
};
use tracing::warn;

use crate::auth::{check, AuthError, Authenticator, Claims};
use crate::error::ApiError;
use crate::state::AppState;

/// Middleware state: how to verify, and which permission this route needs
#[derive(Clone, Debug)]
pub struct PermissionGuard {
    pub authenticator: Authenticator,
    pub required: &'static str,
}

impl PermissionGuard {
    pub fn new(authenticator: Authenticator, required: &'static str) -> Self {
        Self { authenticator, required }
    }

    /// Returns the verified claims, or `None` in no-auth mode.
    async fn authenticate(&self, headers: &HeaderMap) -> Result<Option<Claims>, AuthError> {
        let claims = match &self.authenticator {
            Authenticator::Disabled => None,
            Authenticator::Enforced(verifier) => {
                let token = extract_bearer_token(headers)?;
                Some(verifier.verify(token).await?)
            }
        };
        check(self.authenticator.mode(), claims.as_ref(), self.required)?;
        Ok(claims)
    }
}

/// Attach the permission guard to one method router.
pub fn guarded(
    route: MethodRouter<AppState>,
    authenticator: &Authenticator,
    required: &'static str,
) -> MethodRouter<AppState> {
    route.route_layer(middleware::from_fn_with_state(
        PermissionGuard::new(authenticator.clone(), required),
        require_permission,
    ))
}

/// Rejects the request with 401 unless the bearer token grants the guard's
/// permission. Verified claims are inserted into request extensions.
pub async fn require_permission(
    State(guard): State<PermissionGuard>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let claims = guard.authenticate(request.headers()).await.map_err(|e| {
        warn!(
            "Denied {} {} (requires {}): {}",
            request.method(),
            request.uri().path(),
            guard.required,
            e
        );
        ApiError::from(e)
    })?;

    if let Some(claims) = claims {
        request.extensions_mut().insert(claims);
    }

    Ok(next.run(request).await)
}

/// Extract the token from an `Authorization: Bearer <token>` header
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let auth_header = headers
        .get(header::AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?;

    let auth_str = auth_header
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("header is not visible ASCII"))?;

    let mut parts = auth_str.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => Ok(token),
        (Some(scheme), None, None) if scheme.eq_ignore_ascii_case("bearer") => {
            Err(AuthError::InvalidHeader("token not found"))
        }
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case("bearer") => {
            Err(AuthError::InvalidHeader("authorization header must start with Bearer"))
        }
        _ => Err(AuthError::InvalidHeader("authorization header must be a bearer token")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn extracts_token() {
        assert_eq!(extract_bearer_token(&headers("Bearer abc.def.ghi")).unwrap(), "abc.def.ghi");
        assert_eq!(extract_bearer_token(&headers("bearer abc")).unwrap(), "abc");
    }

    #[test]
    fn missing_header_is_missing_token() {
        let err = extract_bearer_token(&HeaderMap::new()).unwrap_err();
        assert!(matches!(err, AuthError::MissingToken));
    }

    #[test]
    fn malformed_headers_are_invalid() {
        for value in ["Bearer", "Basic dXNlcjpwYXNz", "Bearer a b", ""] {
            let err = extract_bearer_token(&headers(value)).unwrap_err();
            assert!(matches!(err, AuthError::InvalidHeader(_)), "{value:?}");
        }
    }
}
