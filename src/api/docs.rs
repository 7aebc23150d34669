//! OpenAPI documentation and Swagger UI.

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[allow(unused_imports)]
use crate::api::handlers::{
    ConfigValueResponse, HealthResponse, KeyedValueResponse, SecretStringResponse,
    StoreListResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::health_handler,
        crate::api::handlers::list_stores_handler,
        crate::api::handlers::get_secret_string_handler,
        crate::api::handlers::get_secret_object_handler,
        crate::api::handlers::get_secret_key_handler,
        crate::api::handlers::get_named_secret_handler,
        crate::api::handlers::get_config_value_handler,
    ),
    components(schemas(
        HealthResponse,
        StoreListResponse,
        SecretStringResponse,
        KeyedValueResponse,
        ConfigValueResponse,
    )),
    tags(
        (name = "health", description = "Liveness"),
        (name = "stores", description = "Store registry"),
        (name = "secrets", description = "Secret resolution"),
        (name = "config", description = "Merged local configuration")
    ),
    info(
        title = "Keybridge API",
        description = "Multi-store secret resolution service"
    )
)]
pub struct ApiDoc;

/// Router serving the Swagger UI and the OpenAPI document.
pub fn docs_router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()).into()
}
