use sqlx::MySqlPool;

use crate::{
    error::Result,
    models::{NewReceipt, Receipt},
    queries::inserted_id,
};

pub async fn get_all(pool: &MySqlPool) -> Result<Vec<Receipt>> {
    let receipts = sqlx::query_as::<_, Receipt>(
        "SELECT id, numero, monto, fecha FROM comprobantes ORDER BY fecha DESC, id DESC",
    )
    .fetch_all(pool)
    .await?;

    Ok(receipts)
}

pub async fn find_by_id(pool: &MySqlPool, id: i32) -> Result<Option<Receipt>> {
    let receipt = sqlx::query_as::<_, Receipt>(
        "SELECT id, numero, monto, fecha FROM comprobantes WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(receipt)
}

pub async fn create_receipt(pool: &MySqlPool, receipt: &NewReceipt) -> Result<i32> {
    let result = sqlx::query("INSERT INTO comprobantes (numero, monto, fecha) VALUES (?, ?, ?)")
        .bind(&receipt.numero)
        .bind(receipt.monto)
        .bind(receipt.fecha)
        .execute(pool)
        .await?;

    inserted_id(&result)
}

pub async fn delete_receipt(pool: &MySqlPool, id: i32) -> Result<u64> {
    let result = sqlx::query("DELETE FROM comprobantes WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected())
}
