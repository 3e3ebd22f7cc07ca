use sqlx::MySqlPool;

use crate::{error::Result, models::Category, queries::inserted_id};

pub async fn get_all(pool: &MySqlPool) -> Result<Vec<Category>> {
    let categories =
        sqlx::query_as::<_, Category>("SELECT id, nombre FROM categorias ORDER BY id ASC")
            .fetch_all(pool)
            .await?;

    Ok(categories)
}

pub async fn find_by_id(pool: &MySqlPool, id: i32) -> Result<Option<Category>> {
    let category =
        sqlx::query_as::<_, Category>("SELECT id, nombre FROM categorias WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(category)
}

pub async fn create_category(pool: &MySqlPool, nombre: &str) -> Result<i32> {
    let result = sqlx::query("INSERT INTO categorias (nombre) VALUES (?)")
        .bind(nombre)
        .execute(pool)
        .await?;

    inserted_id(&result)
}

pub async fn update_category(pool: &MySqlPool, id: i32, nombre: &str) -> Result<u64> {
    let result = sqlx::query("UPDATE categorias SET nombre = ? WHERE id = ?")
        .bind(nombre)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}

/// Products that reference the category are left untouched.
pub async fn delete_category(pool: &MySqlPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM categorias WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
