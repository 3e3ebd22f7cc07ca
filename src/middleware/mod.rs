use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{AppState, error::AppError, utils::jwt::INVALID_TOKEN};

/// Gate for protected routes: verified claims land in the request extensions.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .ok_or_else(|| AppError::Forbidden("No se proporcionó un token".to_string()))?;

    let token = auth_header
        .to_str()
        .ok()
        .and_then(|header| header.trim().split_once(' '))
        .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("Bearer"))
        .map(|(_, token)| token.trim())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::Unauthorized(INVALID_TOKEN.to_string()))?;

    let claims = state.jwt.verify(token)?;

    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
