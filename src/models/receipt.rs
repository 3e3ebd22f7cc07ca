use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Receipt {
    pub id: i32,
    pub numero: String,
    pub monto: Decimal,
    pub fecha: NaiveDate,
}

/// `fecha` arrives as text so a malformed date is a 400, not a body rejection.
#[derive(Debug, Deserialize, ToSchema)]
pub struct ReceiptRequest {
    pub numero: Option<String>,
    #[serde(default, deserialize_with = "super::fields::blank_as_none")]
    pub monto: Option<Decimal>,
    #[schema(example = "2025-03-14")]
    pub fecha: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewReceipt {
    pub numero: String,
    pub monto: Decimal,
    pub fecha: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReceiptCreatedResponse {
    pub mensaje: String,
    pub id: i32,
}
