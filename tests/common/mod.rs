#![allow(dead_code)]

use anyhow::Result;
use axum::http::{header, HeaderName, HeaderValue};
use axum_test::TestServer;
use sqlx::SqlitePool;

use hahimur::auth::{issue_token, Authenticator, SecretVerifier};
use hahimur::config::DatabaseConfig;
use hahimur::database::DatabaseManager;
use hahimur::{app, AppState};

pub const SECRET: &str = "integration-test-secret";

/// Router under test plus a handle on its (fresh, in-memory) store
pub struct TestApp {
    pub server: TestServer,
    pub pool: SqlitePool,
}

async fn spawn(authenticator: Authenticator) -> Result<TestApp> {
    let pool = DatabaseManager::connect(&DatabaseConfig::in_memory()).await?;
    DatabaseManager::ensure_schema(&pool).await?;
    let server = TestServer::new(app(AppState::new(pool.clone(), authenticator)))?;
    Ok(TestApp { server, pool })
}

/// No-auth mode: the permission guard is bypassed
pub async fn open_app() -> Result<TestApp> {
    spawn(Authenticator::Disabled).await
}

/// Enforced mode with an HS256 verifier over `SECRET`
pub async fn secured_app() -> Result<TestApp> {
    spawn(Authenticator::enforced(SecretVerifier::new(SECRET, None, None))).await
}

pub fn bearer(permissions: &[&str]) -> (HeaderName, HeaderValue) {
    let permissions: Vec<String> = permissions.iter().map(|p| p.to_string()).collect();
    let token = issue_token(SECRET, Some("tester".into()), &permissions, chrono::Duration::hours(1))
        .expect("token");
    raw_authorization(&format!("Bearer {}", token))
}

pub fn raw_authorization(value: &str) -> (HeaderName, HeaderValue) {
    (header::AUTHORIZATION, HeaderValue::from_str(value).expect("header value"))
}

pub async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(pool)
        .await
        .expect("count")
}
