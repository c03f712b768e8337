use async_trait::async_trait;
use communes_backend::domain::Municipality;
use communes_backend::error::{AppError, AppResult};
use communes_backend::infrastructure::repositories::MunicipalityRepository;

use crate::common::fixtures::paris;

/// Read-only store that relies on the trait's default write methods.
struct ReadOnlyRepo;

#[async_trait]
impl MunicipalityRepository for ReadOnlyRepo {
    async fn find_by_code(&self, _code: &str) -> AppResult<Option<Municipality>> {
        Ok(None)
    }

    async fn find_by_latitude_and_longitude_range(
        &self,
        _lat_min: f64,
        _lat_max: f64,
        _lon_min: f64,
        _lon_max: f64,
    ) -> AppResult<Vec<Municipality>> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn default_write_methods_report_unsupported() {
    let repo = ReadOnlyRepo;

    assert!(matches!(repo.count().await, Err(AppError::InternalError(_))));
    assert!(matches!(
        repo.create(&paris()).await,
        Err(AppError::InternalError(_))
    ));
    assert!(matches!(
        repo.update(&paris()).await,
        Err(AppError::InternalError(_))
    ));
    assert!(matches!(
        repo.delete("75056").await,
        Err(AppError::InternalError(_))
    ));
}
