use axum::{Extension, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{DeletedResponse, ImageRequest, ImageUrl, MessageResponse, ProductImage},
    queries::image_queries,
    utils::{
        extractors::{Json, Path, extract_user_id},
        jwt::Claims,
    },
};

#[utoipa::path(
    get,
    path = "/api/imagenes/{id}",
    tag = "Imagenes",
    params(("id" = i32, Path, description = "Id del producto")),
    responses((status = 200, description = "Imágenes del producto", body = [ImageUrl]))
)]
pub async fn list_product_images(
    State(state): State<AppState>,
    Path(producto_id): Path<i32>,
) -> Result<Json<Vec<ImageUrl>>> {
    let images = image_queries::find_by_product_id(&state.db, producto_id).await?;

    Ok(Json(images))
}

#[utoipa::path(
    post,
    path = "/api/imagenes",
    tag = "Imagenes",
    request_body = ImageRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Imagen agregada", body = ProductImage),
        (status = 400, description = "Faltan campos", body = MessageResponse),
    )
)]
pub async fn add_image(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<ImageRequest>,
) -> Result<(StatusCode, Json<ProductImage>)> {
    let user_id = extract_user_id(&claims)?;
    let (url, producto_id) = validate_image(&payload)?;

    let id = image_queries::add_image(&state.db, url, producto_id).await?;
    tracing::info!(user_id, image_id = id, producto_id, "Product image added");

    Ok((
        StatusCode::CREATED,
        Json(ProductImage {
            id,
            url: url.to_string(),
            producto_id,
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/api/imagenes/{id}",
    tag = "Imagenes",
    params(("id" = i32, Path, description = "Id de la imagen")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Imagen eliminada", body = DeletedResponse),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn delete_image(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>> {
    let user_id = extract_user_id(&claims)?;

    if image_queries::delete_image(&state.db, id).await? == 0 {
        return Err(AppError::NotFound("Imagen no encontrada".to_string()));
    }

    tracing::info!(user_id, image_id = id, "Product image deleted");

    Ok(Json(DeletedResponse {
        mensaje: "Imagen eliminada con éxito".to_string(),
        id,
    }))
}

fn validate_image(payload: &ImageRequest) -> Result<(&str, i32)> {
    let url = payload.url.as_deref().map(str::trim).filter(|url| !url.is_empty());
    let producto_id = payload.producto_id.filter(|id| *id > 0);

    match (url, producto_id) {
        (Some(url), Some(producto_id)) => Ok((url, producto_id)),
        _ => Err(AppError::BadRequest(
            "Faltan campos obligatorios (url, producto_id)".to_string(),
        )),
    }
}
