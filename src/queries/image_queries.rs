use sqlx::MySqlPool;

use crate::{error::Result, models::ImageUrl, queries::inserted_id};

pub async fn find_by_product_id(pool: &MySqlPool, producto_id: i32) -> Result<Vec<ImageUrl>> {
    let images = sqlx::query_as::<_, ImageUrl>(
        "SELECT id, url FROM imagenes_productos WHERE producto_id = ? ORDER BY id ASC",
    )
    .bind(producto_id)
    .fetch_all(pool)
    .await?;

    Ok(images)
}

pub async fn add_image(pool: &MySqlPool, url: &str, producto_id: i32) -> Result<i32> {
    let result = sqlx::query("INSERT INTO imagenes_productos (url, producto_id) VALUES (?, ?)")
        .bind(url)
        .bind(producto_id)
        .execute(pool)
        .await?;

    inserted_id(&result)
}

pub async fn delete_image(pool: &MySqlPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM imagenes_productos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
