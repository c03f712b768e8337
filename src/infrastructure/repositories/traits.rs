use crate::domain::Municipality;
use crate::error::{AppError, AppResult};
use async_trait::async_trait;

/// Read/write access to the municipality directory.
///
/// The proximity search only ever calls
/// [`find_by_latitude_and_longitude_range`](Self::find_by_latitude_and_longitude_range);
/// the remaining methods serve the record-management endpoints.
#[async_trait]
pub trait MunicipalityRepository: Send + Sync {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Municipality>>;

    /// Every municipality with `lat_min <= latitude <= lat_max` and
    /// `lon_min <= longitude <= lon_max`, ordered by code.
    async fn find_by_latitude_and_longitude_range(
        &self,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> AppResult<Vec<Municipality>>;

    async fn count(&self) -> AppResult<i64> {
        Err(AppError::InternalError(anyhow::anyhow!(
            "count is not supported by this repository implementation".to_string(),
        )))
    }
    async fn create(&self, municipality: &Municipality) -> AppResult<Municipality> {
        let _ = municipality;
        Err(AppError::InternalError(anyhow::anyhow!(
            "create is not supported by this repository implementation".to_string(),
        )))
    }
    async fn update(&self, municipality: &Municipality) -> AppResult<Municipality> {
        let _ = municipality;
        Err(AppError::InternalError(anyhow::anyhow!(
            "update is not supported by this repository implementation".to_string(),
        )))
    }
    async fn delete(&self, code: &str) -> AppResult<()> {
        let _ = code;
        Err(AppError::InternalError(anyhow::anyhow!(
            "delete is not supported by this repository implementation".to_string(),
        )))
    }
}
