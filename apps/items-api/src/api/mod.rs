//! API routes module
//!
//! Every HTTP route of the service except `/health`, which comes from axum-helpers.

pub mod health;
pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/Item", items::router(state))
        .merge(health::router(state.clone()))
}
