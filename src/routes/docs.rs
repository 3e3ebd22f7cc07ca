use utoipa::{
    Modify, OpenApi,
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
};
use utoipa_swagger_ui::SwaggerUi;

use super::{categories, health, images, login, products, receipts, register};

pub const DOCS_PATH: &str = "/api-docs";
pub const OPENAPI_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "API Tienda",
        version = "1.0.0",
        description = "Catálogo de la tienda con administración protegida por JWT"
    ),
    paths(
        health::health_check,
        health::readiness_check,
        login::login_user,
        register::register_user,
        register::check_users,
        categories::list_categories,
        categories::create_category,
        categories::update_category,
        categories::delete_category,
        products::list_products,
        products::get_product,
        products::create_product,
        products::update_product,
        products::delete_product,
        images::list_product_images,
        images::add_image,
        images::delete_image,
        receipts::create_receipt,
        receipts::list_receipts,
        receipts::get_receipt,
        receipts::delete_receipt,
    ),
    modifiers(&BearerAuth),
    tags(
        (name = "General", description = "Estado del servicio"),
        (name = "Auth", description = "Registro e inicio de sesión"),
        (name = "Categorias", description = "Categorías del catálogo"),
        (name = "Productos", description = "Productos de la tienda"),
        (name = "Imagenes", description = "Imágenes de productos"),
        (name = "Comprobantes", description = "Comprobantes de pago"),
    )
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearerAuth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

pub fn swagger_ui() -> SwaggerUi {
    SwaggerUi::new(DOCS_PATH).url(OPENAPI_PATH, ApiDoc::openapi())
}
