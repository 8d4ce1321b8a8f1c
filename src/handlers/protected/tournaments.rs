use axum::{extract::State, http::StatusCode, Json};
use tracing::{error, info};

use crate::database::models::{NewTournament, Tournament};
use crate::database::TournamentRepository;
use crate::error::ApiError;
use crate::middleware::{no_content, ApiResult, Created, JsonBody, ResourceId};
use crate::state::AppState;

pub const READ: &str = "get:tournaments";
pub const CREATE: &str = "post:tournaments";
pub const DELETE: &str = "delete:tournaments";

/// GET /tournaments
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Tournament>>> {
    let tournaments = TournamentRepository::new(state.pool).select_all().await?;
    Ok(Json(tournaments))
}

/// POST /tournaments - a duplicate name surfaces as a 500
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewTournament>,
) -> ApiResult<Created> {
    let id = TournamentRepository::new(state.pool).insert(&body.name).await?;
    info!("Created tournament {} ({})", id, body.name);
    Ok(Created::at(format!("/tournaments/{}", id)))
}

/// GET /tournaments/:id
pub async fn show(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<Json<Tournament>> {
    let tournament = TournamentRepository::new(state.pool).select_404(id).await?;
    Ok(Json(tournament))
}

/// DELETE /tournaments/:id
///
/// There is no existence check first: any failure to delete, including an
/// id with no row, is a 422 rather than the 404 used on reads.
pub async fn delete(
    State(state): State<AppState>,
    ResourceId(id): ResourceId,
) -> ApiResult<StatusCode> {
    TournamentRepository::new(state.pool)
        .delete(id)
        .await
        .map_err(|e| {
            error!("Failed to delete tournament {}: {}", id, e);
            ApiError::unprocessable_entity(e.to_string())
        })?;
    info!("Deleted tournament {}", id);
    Ok(no_content())
}
