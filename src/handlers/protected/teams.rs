use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::database::models::{NewTeam, Team, TeamPatch};
use crate::database::TeamRepository;
use crate::middleware::{no_content, ApiResult, Created, JsonBody, ResourceId};
use crate::state::AppState;

pub const READ: &str = "get:teams";
pub const CREATE: &str = "post:teams";
pub const UPDATE: &str = "patch:teams";

/// POST /teams
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewTeam>,
) -> ApiResult<Created> {
    let id = TeamRepository::new(state.pool).insert(&body.name, &body.flag).await?;
    info!("Created team {} ({})", id, body.name);
    Ok(Created::at(format!("/teams/{}", id)))
}

/// GET /teams/:id
pub async fn show(State(state): State<AppState>, ResourceId(id): ResourceId) -> ApiResult<Json<Team>> {
    let team = TeamRepository::new(state.pool).select_404(id).await?;
    Ok(Json(team))
}

/// PATCH /teams/:id
pub async fn update(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
    JsonBody(patch): JsonBody<TeamPatch>,
) -> ApiResult<StatusCode> {
    TeamRepository::new(state.pool).update(id, &patch).await?;
    info!("Updated team {}", id);
    Ok(no_content())
}
