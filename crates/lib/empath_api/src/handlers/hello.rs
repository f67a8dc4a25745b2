//! Hello endpoint — liveness probe.

use axum::Json;

use crate::error::AppResult;
use crate::models::HelloResponse;

/// `GET /api/hello` — confirms the service is up and the core lib is linked.
pub async fn hello_handler() -> AppResult<Json<HelloResponse>> {
    Ok(Json(HelloResponse {
        greeting: empath_core::greeting(),
    }))
}
