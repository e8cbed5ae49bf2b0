mod dto;
pub mod handlers;
pub mod repo;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users/:user_id/profile",
        get(handlers::get_profile).put(handlers::upsert_profile),
    )
}
