use anyhow::Context;
use serde_json::json;

use crate::auth::{issue_token, ttl_from_secs};
use crate::cli::OutputFormat;
use crate::config::AppConfig;

pub fn handle(
    config: &AppConfig,
    subject: Option<String>,
    permissions: Vec<String>,
    ttl: Option<u64>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let secret = config
        .security
        .jwt_secret
        .as_deref()
        .context("AUTH_JWT_SECRET must be set to mint tokens")?;

    let ttl_secs = ttl.unwrap_or(config.security.token_ttl_secs);
    let token = issue_token(secret, subject, &permissions, ttl_from_secs(ttl_secs)?)?;

    match output_format {
        OutputFormat::Text => println!("{}", token),
        OutputFormat::Json => println!(
            "{}",
            json!({ "token": token, "permissions": permissions, "expires_in": ttl_secs })
        ),
    }
    Ok(())
}
