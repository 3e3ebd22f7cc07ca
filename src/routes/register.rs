use axum::{extract::State, http::StatusCode};

use crate::{
    AppState,
    config::PasswordScheme,
    error::{AppError, Result},
    models::{CredentialsRequest, MessageResponse, RegisterResponse},
    queries::user_queries,
    utils::extractors::Json,
};

#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "Auth",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Usuario registrado", body = RegisterResponse),
        (status = 400, description = "Datos incompletos", body = MessageResponse),
        (status = 409, description = "El usuario ya existe", body = MessageResponse),
    )
)]
pub async fn register_user(
    State(state): State<AppState>,
    Json(payload): Json<CredentialsRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>)> {
    let usuario = validate_registration(&payload)?;

    let id = match state.passwords.scheme {
        PasswordScheme::Bcrypt => {
            let password_hash = state.passwords.hash(&payload.password).await?;
            user_queries::create_user(&state.db, usuario, &password_hash).await?
        }
        PasswordScheme::Md5 => {
            user_queries::create_user_md5(&state.db, usuario, &payload.password).await?
        }
    };

    tracing::info!(user_id = id, "User registered");

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            mensaje: "Usuario registrado con éxito".to_string(),
            id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/auth/check-users",
    tag = "Auth",
    responses((status = 200, description = "Cantidad de usuarios", body = MessageResponse))
)]
pub async fn check_users(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    let count = user_queries::count(&state.db).await?;

    Ok(Json(MessageResponse {
        mensaje: format!("Usuarios registrados: {}", count),
    }))
}

fn validate_registration(payload: &CredentialsRequest) -> Result<&str> {
    let usuario = payload.usuario.trim();

    if usuario.is_empty() {
        return Err(AppError::BadRequest(
            "El nombre de usuario es obligatorio".to_string(),
        ));
    }

    if payload.password.is_empty() {
        return Err(AppError::BadRequest("La contraseña es obligatoria".to_string()));
    }

    Ok(usuario)
}
