use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{login, logout, refresh, validate};

pub fn init_tokens_router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
        .route("/validate", post(validate))
        .route("/refresh", post(refresh))
        .route("/logout", post(logout))
}
