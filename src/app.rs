use std::sync::Arc;

use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::{HeaderValue, Method},
};
use sqlx::MySqlPool;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::{
    config::{AppConfig, AuthConfig, CorsConfig},
    database,
    error::{AppError, Result},
    routes,
    utils::{jwt::JwtKeys, password::PasswordPolicy},
};

#[derive(Clone)]
pub struct AppState {
    pub db: MySqlPool,
    pub jwt: Arc<JwtKeys>,
    pub passwords: PasswordPolicy,
}

impl AppState {
    pub fn new(db: MySqlPool, auth: &AuthConfig) -> Self {
        Self {
            db,
            jwt: Arc::new(JwtKeys::new(&auth.jwt_secret, auth.token_ttl_secs)),
            passwords: PasswordPolicy::new(auth.password_scheme, auth.bcrypt_cost),
        }
    }
}

pub async fn build(config: &AppConfig) -> Result<Router> {
    let pool = database::create_pool(&config.database).await?;
    let state = AppState::new(pool, &config.auth);

    router(state, config)
}

/// Full HTTP surface over an already constructed state.
pub fn router(state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = cors_layer(&config.cors)?;

    let app = routes::create_router(&state)
        .merge(routes::docs::swagger_ui())
        .fallback_service(ServeDir::new(&config.static_files.dir))
        .layer(DefaultBodyLimit::max(config.server.max_body_size))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    Ok(app)
}

fn cors_layer(config: &CorsConfig) -> Result<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([http::header::CONTENT_TYPE, http::header::AUTHORIZATION]);

    if config.allows_any_origin() {
        return Ok(cors.allow_origin(Any));
    }

    let allowed_origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .map(|origin| {
            origin
                .parse::<HeaderValue>()
                .map_err(|_| AppError::ConfigError(format!("Invalid CORS origin: {}", origin)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(cors.allow_origin(allowed_origins))
}
