use actix_web::{web, HttpResponse};

#[allow(unused_imports)]
use crate::api::dtos::{
    CreateMunicipalityRequest, ErrorResponse, MunicipalityCountResponse,
    MunicipalityDetailResponse, MunicipalityResponse, NearbyQueryParams,
    UpdateMunicipalityRequest,
};
use crate::api::routes::AppState;
use crate::error::AppResult;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/municipalities")
            .route("", web::post().to(create_municipality))
            .route("/count", web::get().to(count_municipalities))
            .route("/{code}", web::get().to(get_municipality))
            .route("/{code}", web::put().to(update_municipality))
            .route("/{code}", web::delete().to(delete_municipality)),
    );
}

#[utoipa::path(
    get,
    path = "/api/v1/municipalities/count",
    responses(
        (status = 200, description = "Number of stored municipalities", body = MunicipalityCountResponse)
    ),
    tag = "municipalities"
)]
pub(crate) async fn count_municipalities(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let result = state.municipality_service.count().await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    get,
    path = "/api/v1/municipalities/{code}",
    params(
        ("code" = String, Path, description = "Official municipality code"),
        NearbyQueryParams
    ),
    responses(
        (status = 200, description = "Municipality with its neighbours", body = MunicipalityDetailResponse),
        (status = 400, description = "Invalid radius", body = ErrorResponse),
        (status = 404, description = "Unknown code", body = ErrorResponse)
    ),
    tag = "municipalities"
)]
pub(crate) async fn get_municipality(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<NearbyQueryParams>,
) -> AppResult<HttpResponse> {
    let code = path.into_inner();
    let result = state
        .municipality_service
        .get_with_nearby(&code, query.into_inner().radius_km)
        .await?;
    match &result.nearby {
        Some(nearby) => state.metrics.record_proximity_search(nearby.len()),
        None => state.metrics.record_search_over_ceiling(),
    }
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    post,
    path = "/api/v1/municipalities",
    request_body = CreateMunicipalityRequest,
    responses(
        (status = 201, description = "Municipality created", body = MunicipalityResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 409, description = "Code already taken", body = ErrorResponse)
    ),
    tag = "municipalities"
)]
pub(crate) async fn create_municipality(
    state: web::Data<AppState>,
    payload: web::Json<CreateMunicipalityRequest>,
) -> AppResult<HttpResponse> {
    let result = state
        .municipality_service
        .create(payload.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(result))
}

#[utoipa::path(
    put,
    path = "/api/v1/municipalities/{code}",
    params(("code" = String, Path, description = "Official municipality code")),
    request_body = UpdateMunicipalityRequest,
    responses(
        (status = 200, description = "Municipality updated", body = MunicipalityResponse),
        (status = 400, description = "Invalid payload", body = ErrorResponse),
        (status = 404, description = "Unknown code", body = ErrorResponse)
    ),
    tag = "municipalities"
)]
pub(crate) async fn update_municipality(
    state: web::Data<AppState>,
    path: web::Path<String>,
    payload: web::Json<UpdateMunicipalityRequest>,
) -> AppResult<HttpResponse> {
    let code = path.into_inner();
    let result = state
        .municipality_service
        .update(&code, payload.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(result))
}

#[utoipa::path(
    delete,
    path = "/api/v1/municipalities/{code}",
    params(("code" = String, Path, description = "Official municipality code")),
    responses(
        (status = 204, description = "Municipality deleted"),
        (status = 404, description = "Unknown code", body = ErrorResponse)
    ),
    tag = "municipalities"
)]
pub(crate) async fn delete_municipality(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    state
        .municipality_service
        .delete(&path.into_inner())
        .await?;
    Ok(HttpResponse::NoContent().finish())
}
