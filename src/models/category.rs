use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Category {
    pub id: i32,
    pub nombre: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryRequest {
    pub nombre: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CategoryUpdatedResponse {
    pub mensaje: String,
    pub id: i32,
    pub nombre: String,
}
