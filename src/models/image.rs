use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ProductImage {
    pub id: i32,
    pub url: String,
    pub producto_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ImageUrl {
    pub id: i32,
    pub url: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ImageRequest {
    pub url: Option<String>,
    #[serde(default, deserialize_with = "super::fields::blank_as_none")]
    pub producto_id: Option<i32>,
}
