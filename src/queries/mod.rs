pub mod category_queries;
pub mod image_queries;
pub mod product_queries;
pub mod receipt_queries;
pub mod user_queries;

use sqlx::mysql::MySqlQueryResult;

use crate::error::{AppError, Result};

pub(crate) fn inserted_id(result: &MySqlQueryResult) -> Result<i32> {
    i32::try_from(result.last_insert_id())
        .map_err(|_| AppError::InternalError("Inserted id out of range".to_string()))
}
