use sqlx::MySqlPool;

use crate::{
    error::Result,
    models::{NewProduct, Product, ProductListItem},
    queries::inserted_id,
};

/// Catalog listing. Each product carries its lowest-id image, if any.
pub async fn list_products(pool: &MySqlPool) -> Result<Vec<ProductListItem>> {
    let products = sqlx::query_as::<_, ProductListItem>(
        r#"
        SELECT
            p.id,
            p.nombre,
            p.precio,
            p.categoria_id,
            c.nombre AS categoria,
            (
                SELECT ip.url
                FROM imagenes_productos ip
                WHERE ip.producto_id = p.id
                ORDER BY ip.id ASC
                LIMIT 1
            ) AS imagenes_productos_url
        FROM productos p
        LEFT JOIN categorias c ON p.categoria_id = c.id
        ORDER BY p.id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(products)
}

pub async fn find_by_id(pool: &MySqlPool, id: i32) -> Result<Option<Product>> {
    let product = sqlx::query_as::<_, Product>(
        "SELECT id, nombre, precio, categoria_id FROM productos WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(product)
}

pub async fn create_product(pool: &MySqlPool, product: &NewProduct) -> Result<i32> {
    let result =
        sqlx::query("INSERT INTO productos (nombre, precio, categoria_id) VALUES (?, ?, ?)")
            .bind(&product.nombre)
            .bind(product.precio)
            .bind(product.categoria_id)
            .execute(pool)
            .await?;

    inserted_id(&result)
}

pub async fn update_product(pool: &MySqlPool, id: i32, product: &NewProduct) -> Result<u64> {
    let result = sqlx::query(
        "UPDATE productos SET nombre = ?, precio = ?, categoria_id = ? WHERE id = ?",
    )
    .bind(&product.nombre)
    .bind(product.precio)
    .bind(product.categoria_id)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

pub async fn delete_product(pool: &MySqlPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM productos WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
