use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dtos::{
    AlertKind, AlertMessage, CreateMunicipalityRequest, ErrorResponse, MunicipalityCountResponse,
    MunicipalityDetailResponse, MunicipalityResponse, NearbyMunicipalityResponse,
    UpdateMunicipalityRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Municipality endpoints
        crate::api::routes::municipalities::count_municipalities,
        crate::api::routes::municipalities::get_municipality,
        crate::api::routes::municipalities::create_municipality,
        crate::api::routes::municipalities::update_municipality,
        crate::api::routes::municipalities::delete_municipality,
        // Health checks
        crate::api::routes::health,
        crate::api::routes::ready,
    ),
    components(
        schemas(
            CreateMunicipalityRequest,
            UpdateMunicipalityRequest,
            MunicipalityResponse,
            NearbyMunicipalityResponse,
            MunicipalityDetailResponse,
            MunicipalityCountResponse,
            AlertMessage,
            AlertKind,
            ErrorResponse,
        )
    ),
    tags(
        (name = "municipalities", description = "Municipality directory and proximity search"),
        (name = "health", description = "Health check endpoints"),
    ),
    info(
        title = "Communes API",
        version = "0.1.0",
        description = "Municipality directory with radius-based proximity search",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

pub fn configure_swagger_ui(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    );
}
