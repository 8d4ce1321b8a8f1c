pub mod commands;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "hahimur")]
#[command(about = "Hahimur - tournament and team REST API")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Run the HTTP server (default)")]
    Serve {
        #[arg(long, help = "Port to bind, overriding PORT")]
        port: Option<u16>,
    },

    #[command(about = "Mint a bearer token signed with AUTH_JWT_SECRET")]
    Token {
        #[arg(long, help = "Token subject")]
        subject: Option<String>,
        #[arg(short = 'p', long = "permission", help = "Granted permission, e.g. post:teams (repeatable)")]
        permissions: Vec<String>,
        #[arg(long, help = "Lifetime in seconds, overriding AUTH_TOKEN_TTL_SECS")]
        ttl: Option<u64>,
    },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Serve { port: None }) {
        Commands::Serve { port } => commands::serve::handle(config, port).await,
        Commands::Token { subject, permissions, ttl } => {
            commands::token::handle(&config, subject, permissions, ttl, output_format)
        }
    }
}
