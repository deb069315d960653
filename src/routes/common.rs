//! Liveness and version routes.

use crate::state::AppState;
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    database: Option<&'static str>,
}

/// Reports healthy only after the datastore answers a probe query.
async fn healthcheck(
    State(state): State<AppState>,
) -> Result<Json<HealthBody>, (axum::http::StatusCode, Json<HealthBody>)> {
    if sqlx::query("SELECT 1").fetch_optional(&state.pool).await.is_err() {
        return Err((
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(HealthBody {
                status: "unhealthy",
                database: Some("unavailable"),
            }),
        ));
    }
    Ok(Json(HealthBody {
        status: "healthy",
        database: None,
    }))
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// GET / and GET /healthcheck (both probe the datastore), GET /version.
pub fn common_routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(healthcheck))
        .route("/healthcheck", get(healthcheck))
        .route("/version", get(version))
        .with_state(state)
}
