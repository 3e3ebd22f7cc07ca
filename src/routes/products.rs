use axum::{Extension, extract::State, http::StatusCode};
use rust_decimal::Decimal;

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        DeletedResponse, MessageResponse, NewProduct, Product, ProductListItem, ProductRequest,
        ProductSavedResponse,
    },
    queries::product_queries,
    utils::{
        extractors::{Json, Path, extract_user_id},
        jwt::Claims,
    },
};

const NOT_FOUND: &str = "Producto no encontrado";
const MISSING_FIELDS: &str = "Faltan campos obligatorios (nombre, precio, categoria_id)";

#[utoipa::path(
    get,
    path = "/api/productos",
    tag = "Productos",
    responses((status = 200, description = "Catálogo de productos", body = [ProductListItem]))
)]
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<ProductListItem>>> {
    let products = product_queries::list_products(&state.db).await?;

    Ok(Json(products))
}

#[utoipa::path(
    get,
    path = "/api/productos/{id}",
    tag = "Productos",
    params(("id" = i32, Path, description = "Id del producto")),
    responses(
        (status = 200, description = "Producto", body = Product),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Product>> {
    let product = product_queries::find_by_id(&state.db, id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND.to_string()))?;

    Ok(Json(product))
}

#[utoipa::path(
    post,
    path = "/api/productos",
    tag = "Productos",
    request_body = ProductRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Producto creado", body = ProductSavedResponse),
        (status = 400, description = "Faltan campos", body = MessageResponse),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ProductRequest>,
) -> Result<(StatusCode, Json<ProductSavedResponse>)> {
    let user_id = extract_user_id(&claims)?;
    let product = validate_product(payload)?;

    let id = product_queries::create_product(&state.db, &product).await?;
    tracing::info!(user_id, product_id = id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(saved("Producto creado correctamente", id, product)),
    ))
}

#[utoipa::path(
    put,
    path = "/api/productos/{id}",
    tag = "Productos",
    params(("id" = i32, Path, description = "Id del producto")),
    request_body = ProductRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Producto actualizado", body = ProductSavedResponse),
        (status = 400, description = "Faltan campos", body = MessageResponse),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(payload): Json<ProductRequest>,
) -> Result<Json<ProductSavedResponse>> {
    let user_id = extract_user_id(&claims)?;
    let product = validate_product(payload)?;

    if product_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    product_queries::update_product(&state.db, id, &product).await?;
    tracing::info!(user_id, product_id = id, "Product updated");

    Ok(Json(saved("Producto actualizado con éxito", id, product)))
}

#[utoipa::path(
    delete,
    path = "/api/productos/{id}",
    tag = "Productos",
    params(("id" = i32, Path, description = "Id del producto")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Producto eliminado", body = DeletedResponse),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>> {
    let user_id = extract_user_id(&claims)?;

    if product_queries::delete_product(&state.db, id).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!(user_id, product_id = id, "Product deleted");

    Ok(Json(DeletedResponse {
        mensaje: "Producto eliminado con éxito".to_string(),
        id,
    }))
}

fn saved(mensaje: &str, id: i32, product: NewProduct) -> ProductSavedResponse {
    ProductSavedResponse {
        mensaje: mensaje.to_string(),
        id,
        nombre: product.nombre,
        precio: product.precio,
        categoria_id: product.categoria_id,
    }
}

fn validate_product(payload: ProductRequest) -> Result<NewProduct> {
    let missing = || AppError::BadRequest(MISSING_FIELDS.to_string());

    let nombre = payload
        .nombre
        .as_deref()
        .map(str::trim)
        .filter(|nombre| !nombre.is_empty())
        .ok_or_else(missing)?;

    let precio = payload
        .precio
        .filter(|precio| *precio > Decimal::ZERO)
        .ok_or_else(missing)?;

    let categoria_id = payload
        .categoria_id
        .filter(|id| *id > 0)
        .ok_or_else(missing)?;

    Ok(NewProduct {
        nombre: nombre.to_string(),
        precio,
        categoria_id,
    })
}
