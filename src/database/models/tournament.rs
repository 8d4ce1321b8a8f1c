use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Tournament {
    pub id: i64,
    pub name: String,
}

/// Body of `POST /tournaments`
#[derive(Debug, Clone, Deserialize)]
pub struct NewTournament {
    pub name: String,
}
