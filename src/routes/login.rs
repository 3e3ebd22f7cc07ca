use axum::extract::State;

use crate::{
    AppState,
    config::PasswordScheme,
    error::{AppError, Result},
    models::{CredentialsRequest, LoginResponse, MessageResponse, User},
    queries::user_queries,
    utils::{extractors::Json, password::is_bcrypt_hash},
};

#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Login exitoso", body = LoginResponse),
        (status = 401, description = "Credenciales inválidas", body = MessageResponse),
    )
)]
pub async fn login_user(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<Json<LoginResponse>> {
    let user = user_queries::find_by_usuario(&state.db, payload.usuario.trim())
        .await?
        .ok_or_else(invalid_credentials)?;

    if !password_matches(&state, &user, &payload.password).await? {
        return Err(invalid_credentials());
    }

    let token = state.jwt.issue(user.id, &user.usuario)?;
    tracing::info!(user_id = user.id, "User logged in");

    Ok(Json(LoginResponse {
        mensaje: "Login exitoso".to_string(),
        token,
    }))
}

fn invalid_credentials() -> AppError {
    AppError::Unauthorized("Credenciales inválidas".to_string())
}

async fn password_matches(state: &AppState, user: &User, password: &str) -> Result<bool> {
    if is_bcrypt_hash(&user.password) {
        return state.passwords.verify(password, &user.password).await;
    }

    if !user_queries::matches_md5(&state.db, user.id, password).await? {
        return Ok(false);
    }

    if state.passwords.scheme == PasswordScheme::Bcrypt {
        upgrade_legacy_hash(state, user.id, password).await;
    }

    Ok(true)
}

/// A failed upgrade leaves the MD5 row in place; the login itself still succeeds.
async fn upgrade_legacy_hash(state: &AppState, user_id: i32, password: &str) {
    let upgraded = match state.passwords.hash(password).await {
        Ok(hash) => user_queries::update_password(&state.db, user_id, &hash).await,
        Err(e) => Err(e),
    };

    match upgraded {
        Ok(()) => tracing::info!(user_id, "Upgraded legacy MD5 password to bcrypt"),
        Err(e) => tracing::warn!(user_id, "Failed to upgrade legacy password hash: {}", e),
    }
}
