use axum::{Extension, extract::State, http::StatusCode};
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        DeletedResponse, MessageResponse, NewReceipt, Receipt, ReceiptCreatedResponse,
        ReceiptRequest,
    },
    queries::receipt_queries,
    utils::{
        extractors::{Json, Path, extract_user_id},
        jwt::Claims,
    },
};

const NOT_FOUND: &str = "Comprobante no encontrado";

#[utoipa::path(
    post,
    path = "/api/comprobantes",
    tag = "Comprobantes",
    request_body = ReceiptRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Comprobante registrado", body = ReceiptCreatedResponse),
        (status = 400, description = "Faltan datos", body = MessageResponse),
    )
)]
pub async fn create_receipt(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ReceiptRequest>,
) -> Result<(StatusCode, Json<ReceiptCreatedResponse>)> {
    let user_id = extract_user_id(&claims)?;
    let receipt = validate_receipt(payload)?;

    let id = receipt_queries::create_receipt(&state.db, &receipt).await?;
    tracing::info!(user_id, receipt_id = id, "Receipt registered");

    Ok((
        StatusCode::CREATED,
        Json(ReceiptCreatedResponse {
            mensaje: "Comprobante registrado exitosamente".to_string(),
            id,
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/api/comprobantes",
    tag = "Comprobantes",
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Comprobantes, el más reciente primero", body = [Receipt])
    )
)]
pub async fn list_receipts(State(state): State<AppState>) -> Result<Json<Vec<Receipt>>> {
    let receipts = receipt_queries::get_all(&state.db).await?;

    Ok(Json(receipts))
}

#[utoipa::path(
    get,
    path = "/api/comprobantes/{id}",
    tag = "Comprobantes",
    params(("id" = i32, Path, description = "Id del comprobante")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Comprobante", body = Receipt),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn get_receipt(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Receipt>> {
    let receipt = receipt_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(receipt))
}

#[utoipa::path(
    delete,
    path = "/api/comprobantes/{id}",
    tag = "Comprobantes",
    params(("id" = i32, Path, description = "Id del comprobante")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Comprobante eliminado", body = DeletedResponse),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn delete_receipt(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>> {
    let user_id = extract_user_id(&claims)?;

    if receipt_queries::delete_receipt(&state.db, id).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!(user_id, receipt_id = id, "Receipt deleted");

    Ok(Json(DeletedResponse {
        mensaje: "Comprobante eliminado con éxito".to_string(),
        id,
    }))
}

fn validate_receipt(payload: ReceiptRequest) -> Result<NewReceipt> {
    let missing =
        || AppError::BadRequest("Faltan datos requeridos (numero, monto, fecha)".to_string());

    let numero = payload
        .numero
        .as_deref()
        .map(str::trim)
        .filter(|numero| !numero.is_empty())
        .ok_or_else(missing)?;

    let monto = payload
        .monto
        .filter(|monto| *monto > Decimal::ZERO)
        .ok_or_else(missing)?;

    let fecha = payload
        .fecha
        .as_deref()
        .map(str::trim)
        .filter(|fecha| !fecha.is_empty())
        .ok_or_else(missing)?;

    let fecha = NaiveDate::parse_from_str(fecha, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest("La fecha debe tener el formato AAAA-MM-DD".to_string())
    })?;

    Ok(NewReceipt {
        numero: numero.to_string(),
        monto,
        fecha,
    })
}
