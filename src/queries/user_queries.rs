use sqlx::MySqlPool;

use crate::{
    error::{AppError, Result},
    models::User,
    queries::inserted_id,
};

const DUPLICATE_USER: &str = "El nombre de usuario ya existe.";

pub async fn find_by_usuario(pool: &MySqlPool, usuario: &str) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, usuario, password FROM usuarios WHERE usuario = ?",
    )
    .bind(usuario)
    .fetch_optional(pool)
    .await?;

    Ok(user)
}

pub async fn create_user(pool: &MySqlPool, usuario: &str, password_hash: &str) -> Result<i32> {
    let result = sqlx::query("INSERT INTO usuarios (usuario, password) VALUES (?, ?)")
        .bind(usuario)
        .bind(password_hash)
        .execute(pool)
        .await
        .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_USER))?;

    inserted_id(&result)
}

/// Legacy storage: the digest is computed by MySQL's `MD5()`.
pub async fn create_user_md5(pool: &MySqlPool, usuario: &str, password: &str) -> Result<i32> {
    let result = sqlx::query("INSERT INTO usuarios (usuario, password) VALUES (?, MD5(?))")
        .bind(usuario)
        .bind(password)
        .execute(pool)
        .await
        .map_err(|e| AppError::conflict_on_duplicate(e, DUPLICATE_USER))?;

    inserted_id(&result)
}

pub async fn matches_md5(pool: &MySqlPool, id: i32, password: &str) -> Result<bool> {
    let count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM usuarios WHERE id = ? AND password = MD5(?)")
            .bind(id)
            .bind(password)
            .fetch_one(pool)
            .await?;

    Ok(count > 0)
}

pub async fn update_password(pool: &MySqlPool, id: i32, password_hash: &str) -> Result<()> {
    sqlx::query("UPDATE usuarios SET password = ? WHERE id = ?")
        .bind(password_hash)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(())
}

pub async fn count(pool: &MySqlPool) -> Result<i64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM usuarios")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
