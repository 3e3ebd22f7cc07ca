mod categories;
pub mod docs;
mod health;
mod images;
mod login;
mod products;
mod receipts;
mod register;

use axum::{
    Router, middleware,
    routing::{delete, get, post, put},
};

use crate::{AppState, middleware::auth_middleware};

pub fn create_router(state: &AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/api/auth/login", post(login::login_user))
        .route("/api/auth/register", post(register::register_user))
        .route("/api/auth/check-users", get(register::check_users))
        .route("/api/categorias", get(categories::list_categories))
        .route("/api/productos", get(products::list_products))
        .route("/api/productos/{id}", get(products::get_product))
        .route("/api/imagenes/{id}", get(images::list_product_images));

    let protected = Router::new()
        .route("/api/categorias", post(categories::create_category))
        .route(
            "/api/categorias/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/api/productos", post(products::create_product))
        .route(
            "/api/productos/{id}",
            put(products::update_product).delete(products::delete_product),
        )
        .route("/api/imagenes", post(images::add_image))
        .route("/api/imagenes/{id}", delete(images::delete_image))
        .route(
            "/api/comprobantes",
            get(receipts::list_receipts).post(receipts::create_receipt),
        )
        .route(
            "/api/comprobantes/{id}",
            get(receipts::get_receipt).delete(receipts::delete_receipt),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    public.merge(protected)
}
