use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Car endpoints
        crate::api::routes::cars::get_car,
        crate::api::routes::cars::nearest_cars,
        // Health check
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            crate::api::dtos::car_dto::CarResponse,
            crate::api::dtos::car_dto::NearbyCarResponse,
            crate::api::dtos::car_dto::NearestCarsResponse,
            crate::api::dtos::location_dto::LocationResponse,
            crate::api::dtos::common::ErrorResponse,
        )
    ),
    tags(
        (name = "cars", description = "Fleet browsing and nearest-car search"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Car Rental Backend API",
        version = "0.1.0",
        description = "Car rental fleet management backend API",
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
