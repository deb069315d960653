//! Router assembly.

mod common;
mod students;

pub use common::common_routes;
pub use students::student_routes;

use crate::state::AppState;
use axum::Router;

/// Full API: endpoints at the root, mirrored under /api/v1 for clients
/// built against the versioned prefix.
pub fn api_router(state: AppState) -> Router {
    let api = Router::new()
        .merge(common_routes(state.clone()))
        .merge(student_routes(state));
    Router::new().nest("/api/v1", api.clone()).merge(api)
}
