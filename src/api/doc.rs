use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub const AUTH_TAG: &str = "Auth";
pub const USER_TAG: &str = "User";
pub const AZKAR_TAG: &str = "Azkar";
pub const DASHBOARD_TAG: &str = "Dashboard";
pub const TASBIH_TAG: &str = "Tasbih";
pub const HEALTH_TAG: &str = "Health";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Azkar",
        description = "Remembrance tracking and tasbih counter API",
    ),
    modifiers(&SecurityAddon),
    components(
        schemas(
            crate::api::dto::ErrorResponse,
        )
    ),
    tags(
        (name = AUTH_TAG, description = "Registration, sign-in and token refresh"),
        (name = USER_TAG, description = "The signed-in user's profile"),
        (name = AZKAR_TAG, description = "Categories, entries, search, progress and bookmarks"),
        (name = DASHBOARD_TAG, description = "Progress statistics"),
        (name = TASBIH_TAG, description = "Daily tasbih counts"),
        (name = HEALTH_TAG, description = "Health check endpoints"),
    )
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearerAuth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT access token from /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
