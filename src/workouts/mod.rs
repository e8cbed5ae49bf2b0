mod dto;
pub mod handlers;
pub mod repo;
pub mod services;

use axum::routing::post;
use axum::Router;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/users/:user_id/workouts", post(handlers::log_workout))
}
