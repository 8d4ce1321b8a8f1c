use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::handlers::protected::{teams, tournaments};
use crate::handlers::public;
use crate::middleware::guarded;
use crate::state::AppState;

/// Build the full router. Each protected method carries its own permission
/// guard; undefined verbs on a known path get 405 and unknown paths 404.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(public::health).fallback(public::method_not_allowed))
        .merge(tournament_routes(&state))
        .merge(team_routes(&state))
        .fallback(public::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn tournament_routes(state: &AppState) -> Router<AppState> {
    let auth = &state.authenticator;

    Router::new()
        .route(
            "/tournaments",
            guarded(get(tournaments::list), auth, tournaments::READ)
                .merge(guarded(post(tournaments::create), auth, tournaments::CREATE))
                .fallback(public::method_not_allowed),
        )
        .route(
            "/tournaments/:id",
            guarded(get(tournaments::show), auth, tournaments::READ)
                .merge(guarded(delete(tournaments::delete), auth, tournaments::DELETE))
                .fallback(public::method_not_allowed),
        )
}

fn team_routes(state: &AppState) -> Router<AppState> {
    let auth = &state.authenticator;

    Router::new()
        .route(
            "/teams",
            guarded(post(teams::create), auth, teams::CREATE).fallback(public::method_not_allowed),
        )
        .route(
            "/teams/:id",
            guarded(get(teams::show), auth, teams::READ)
                .merge(guarded(patch(teams::update), auth, teams::UPDATE))
                .fallback(public::method_not_allowed),
        )
}
