use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::modules::tokens::controller::ErrorResponse;
use crate::modules::tokens::model::{Claims, LoginRequest, TokenPair};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::tokens::controller::login,
        crate::modules::tokens::controller::validate,
        crate::modules::tokens::controller::refresh,
        crate::modules::tokens::controller::logout,
    ),
    components(
        schemas(
            LoginRequest,
            TokenPair,
            Claims,
            ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Tokens", description = "Credential pair issuance, validation, rotation and revocation")
    ),
    info(
        title = "Tokensmith API",
        version = "0.1.0",
        description = "A token lifecycle service built with Rust, Axum, and PostgreSQL: JWT access/refresh pairs with single-use rotation and a durable revocation ledger.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("API key")
                        .build(),
                ),
            )
        }
    }
}
