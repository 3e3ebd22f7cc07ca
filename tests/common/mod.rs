#![allow(dead_code)]

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::{MySqlPool, mysql::MySqlPoolOptions};
use tienda_back::{AppConfig, AppState, app};
use tower::ServiceExt;

pub const SECRET: &str = "test-secret";

pub fn config(static_dir: &str) -> AppConfig {
    AppConfig::from_lookup(|key| match key {
        "JWT_SECRET" => Some(SECRET.to_string()),
        "BCRYPT_COST" => Some("4".to_string()),
        "STATIC_DIR" => Some(static_dir.to_string()),
        _ => None,
    })
    .expect("test configuration")
}

/// Router over a pool that never connects unless a handler reaches the store.
pub fn offline_app(static_dir: &str) -> (Router, AppState) {
    let config = config(static_dir);
    let pool = MySqlPoolOptions::new()
        .connect_lazy(&config.database.url)
        .expect("lazy pool");
    with_pool(pool, &config)
}

pub fn with_pool(pool: MySqlPool, config: &AppConfig) -> (Router, AppState) {
    let state = AppState::new(pool, &config.auth);
    let router = app::router(state.clone(), config).expect("router");
    (router, state)
}

pub fn token_for(state: &AppState, user_id: i32, usuario: &str) -> String {
    state.jwt.issue(user_id, usuario).expect("token")
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
