use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Product {
    pub id: i32,
    pub nombre: String,
    pub precio: Decimal,
    pub categoria_id: i32,
}

/// Catalog row: category name and the product's first image, both nullable.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct ProductListItem {
    pub id: i32,
    pub nombre: String,
    pub precio: Decimal,
    pub categoria_id: i32,
    pub categoria: Option<String>,
    pub imagenes_productos_url: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct ProductRequest {
    pub nombre: Option<String>,
    #[serde(default, deserialize_with = "super::fields::blank_as_none")]
    pub precio: Option<Decimal>,
    #[serde(default, deserialize_with = "super::fields::blank_as_none")]
    pub categoria_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub nombre: String,
    pub precio: Decimal,
    pub categoria_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ProductSavedResponse {
    pub mensaje: String,
    pub id: i32,
    pub nombre: String,
    pub precio: Decimal,
    pub categoria_id: i32,
}
