use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Team {
    pub id: i64,
    pub name: String,
    /// URL of the team's flag image
    pub flag: Option<String>,
}

/// Body of `POST /teams`; both fields are required on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTeam {
    pub name: String,
    pub flag: String,
}

/// Body of `PATCH /teams/:id`; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamPatch {
    pub name: Option<String>,
    pub flag: Option<String>,
}
