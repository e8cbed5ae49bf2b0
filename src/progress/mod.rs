mod dto;
pub mod handlers;
pub mod services;

use axum::routing::get;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/progress", get(handlers::get_progress))
        .route("/users/:user_id/stats", get(handlers::get_weekly_stats))
}
