use crate::api::dtos::{
    AlertKind, AlertMessage, CreateMunicipalityRequest, MunicipalityResponse,
    NearbyMunicipalityResponse, UpdateMunicipalityRequest,
};
use crate::domain::{GeoPoint, Municipality};
use crate::error::AppResult;

pub fn map_municipality_to_response(municipality: Municipality) -> MunicipalityResponse {
    MunicipalityResponse {
        code: municipality.code,
        name: municipality.name,
        postal_code: municipality.postal_code,
        latitude: municipality.latitude,
        longitude: municipality.longitude,
    }
}

pub fn map_nearby_to_response(
    (municipality, distance_km): (Municipality, u64),
) -> NearbyMunicipalityResponse {
    NearbyMunicipalityResponse {
        code: municipality.code,
        name: municipality.name,
        postal_code: municipality.postal_code,
        latitude: municipality.latitude,
        longitude: municipality.longitude,
        distance_km,
    }
}

pub fn map_create_request(request: CreateMunicipalityRequest) -> AppResult<Municipality> {
    let location = GeoPoint::new(request.latitude, request.longitude)?;
    Ok(Municipality::new(
        request.code.trim(),
        request.name.trim(),
        request.postal_code.trim(),
        location,
    )?)
}

pub fn map_update_request(
    code: &str,
    request: UpdateMunicipalityRequest,
) -> AppResult<Municipality> {
    let location = GeoPoint::new(request.latitude, request.longitude)?;
    Ok(Municipality::new(
        code,
        request.name.trim(),
        request.postal_code.trim(),
        location,
    )?)
}

pub fn radius_ceiling_alert(max_radius_km: u32) -> AlertMessage {
    AlertMessage {
        kind: AlertKind::Danger,
        message: format!("search radius cannot exceed {max_radius_km} km"),
    }
}
