use axum::{Extension, extract::State, http::StatusCode};

use crate::{
    AppState,
    error::{AppError, Result},
    models::{
        Category, CategoryRequest, CategoryUpdatedResponse, DeletedResponse, MessageResponse,
    },
    queries::category_queries,
    utils::{
        extractors::{Json, Path, extract_user_id},
        jwt::Claims,
    },
};

const NOT_FOUND: &str = "Categoría no encontrada";

#[utoipa::path(
    get,
    path = "/api/categorias",
    tag = "Categorias",
    responses((status = 200, description = "Lista de categorías", body = [Category]))
)]
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>> {
    let categories = category_queries::get_all(&state.db).await?;

    Ok(Json(categories))
}

#[utoipa::path(
    post,
    path = "/api/categorias",
    tag = "Categorias",
    request_body = CategoryRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 201, description = "Categoría creada", body = Category),
        (status = 400, description = "Nombre vacío", body = MessageResponse),
    )
)]
pub async fn create_category(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Json(payload): Json<CategoryRequest>,
) -> Result<(StatusCode, Json<Category>)> {
    let user_id = extract_user_id(&claims)?;
    let nombre = validate_nombre(&payload)?;

    let id = category_queries::create_category(&state.db, nombre).await?;
    tracing::info!(user_id, category_id = id, "Category created");

    Ok((
        StatusCode::CREATED,
        Json(Category {
            id,
            nombre: nombre.to_string(),
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i32, Path, description = "Id de la categoría")),
    request_body = CategoryRequest,
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Categoría actualizada", body = CategoryUpdatedResponse),
        (status = 400, description = "Nombre vacío", body = MessageResponse),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn update_category(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
    Json(payload): Json<CategoryRequest>,
) -> Result<Json<CategoryUpdatedResponse>> {
    let user_id = extract_user_id(&claims)?;
    let nombre = validate_nombre(&payload)?;

    if category_queries::find_by_id(&state.db, id).await?.is_none() {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    category_queries::update_category(&state.db, id, nombre).await?;
    tracing::info!(user_id, category_id = id, "Category updated");

    Ok(Json(CategoryUpdatedResponse {
        mensaje: "Categoría actualizada con éxito".to_string(),
        id,
        nombre: nombre.to_string(),
    }))
}

#[utoipa::path(
    delete,
    path = "/api/categorias/{id}",
    tag = "Categorias",
    params(("id" = i32, Path, description = "Id de la categoría")),
    security(("bearerAuth" = [])),
    responses(
        (status = 200, description = "Categoría eliminada", body = DeletedResponse),
        (status = 404, description = "No existe", body = MessageResponse),
    )
)]
pub async fn delete_category(
    State(state): State<AppState>,
    Extension(claims): Extension<Claims>,
    Path(id): Path<i32>,
) -> Result<Json<DeletedResponse>> {
    let user_id = extract_user_id(&claims)?;

    if category_queries::delete_category(&state.db, id).await? == 0 {
        return Err(AppError::NotFound(NOT_FOUND.to_string()));
    }

    tracing::info!(user_id, category_id = id, "Category deleted");

    Ok(Json(DeletedResponse {
        mensaje: "Categoría eliminada con éxito".to_string(),
        id,
    }))
}

fn validate_nombre(payload: &CategoryRequest) -> Result<&str> {
    payload
        .nombre
        .as_deref()
        .map(str::trim)
        .filter(|nombre| !nombre.is_empty())
        .ok_or_else(|| {
            AppError::BadRequest("El nombre de la categoría es obligatorio".to_string())
        })
}
