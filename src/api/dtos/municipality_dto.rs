use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct CreateMunicipalityRequest {
    #[validate(length(equal = 5, message = "code must be 5 characters long"))]
    pub code: String,

    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters long"))]
    pub name: String,

    #[validate(length(equal = 5, message = "postal code must be 5 characters long"))]
    pub postal_code: String,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize, Validate, ToSchema)]
pub struct UpdateMunicipalityRequest {
    #[validate(length(min = 1, max = 100, message = "name must be 1 to 100 characters long"))]
    pub name: String,

    #[validate(length(equal = 5, message = "postal code must be 5 characters long"))]
    pub postal_code: String,

    #[validate(range(min = -90.0, max = 90.0, message = "latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(
        min = -180.0,
        max = 180.0,
        message = "longitude must be between -180 and 180"
    ))]
    pub longitude: f64,
}

/// Query string of the municipality detail endpoint.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NearbyQueryParams {
    /// Search radius in kilometers; the configured default applies when absent.
    pub radius_km: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MunicipalityResponse {
    pub code: String,
    pub name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NearbyMunicipalityResponse {
    pub code: String,
    pub name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_km: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Success,
    Danger,
}

/// User-facing notice shown instead of, or alongside, a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AlertMessage {
    pub kind: AlertKind,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MunicipalityDetailResponse {
    pub municipality: MunicipalityResponse,
    pub radius_km: u32,
    /// `None` when the search was skipped; see `alert`.
    pub nearby: Option<Vec<NearbyMunicipalityResponse>>,
    pub alert: Option<AlertMessage>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct MunicipalityCountResponse {
    pub total: i64,
}
