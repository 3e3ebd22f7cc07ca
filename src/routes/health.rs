use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{database, error::Result, AppState};

#[utoipa::path(
    get,
    path = "/health",
    tag = "General",
    responses((status = 200, description = "El proceso responde"))
)]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "ok" })))
}

#[utoipa::path(
    get,
    path = "/health/ready",
    tag = "General",
    responses(
        (status = 200, description = "La base de datos responde"),
        (status = 500, description = "Sin conexión a la base de datos"),
    )
)]
pub async fn readiness_check(State(state): State<AppState>) -> Result<impl IntoResponse> {
    database::check_health(&state.db).await?;

    Ok((
        StatusCode::OK,
        Json(json!({
            "status": "ready",
            "database": "connected"
        })),
    ))
}
