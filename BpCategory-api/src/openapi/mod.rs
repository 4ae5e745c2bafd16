use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Configure Swagger UI endpoints
pub fn configure_swagger_routes() -> SwaggerUi {
    SwaggerUi::new("/swagger-ui")
        .url("/api-docs/openapi.json", ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::health_check,

        // Classification endpoints
        crate::api::handlers::classify::classify_blood_pressure,
    ),
    components(
        schemas(
            // Entities
            crate::entities::classification::ClassificationResponse,
            crate::entities::common::ErrorDetail,
            bp_category_domain::entities::BloodPressureCategory,

            // Health handlers
            crate::api::handlers::health::HealthResponse,
            crate::api::handlers::health::ComponentStatus,
            crate::api::handlers::health::ComponentHealthStatus,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoint"),
        (name = "classification", description = "Blood pressure classification endpoints")
    ),
    info(
        title = "Blood Pressure Category API",
        version = "0.1.0",
        description = "Classify blood pressure readings against the banding chart",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;
