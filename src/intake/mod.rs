mod dto;
pub mod handlers;
pub mod repo;
mod services;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/users/:user_id/water", post(handlers::log_water))
        .route("/users/:user_id/calories", post(handlers::log_calories))
}
