use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::api::dtos::{
    CreateMunicipalityRequest, MunicipalityCountResponse, MunicipalityDetailResponse,
    MunicipalityResponse, UpdateMunicipalityRequest,
};
use crate::application::proximity;
use crate::config::SearchConfig;
use crate::domain::Municipality;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::MunicipalityRepository;

pub mod mapper;

#[derive(Clone)]
pub struct MunicipalityService {
    repo: Arc<dyn MunicipalityRepository>,
    search: SearchConfig,
}

impl MunicipalityService {
    pub fn new(repo: Arc<dyn MunicipalityRepository>, search: SearchConfig) -> Self {
        Self { repo, search }
    }

    /// Loads a municipality and its neighbours within `radius_km`.
    ///
    /// A radius above the configured ceiling is not an error: the record is
    /// still returned, `nearby` stays empty and an alert explains why.
    pub async fn get_with_nearby(
        &self,
        code: &str,
        radius_km: Option<u32>,
    ) -> AppResult<MunicipalityDetailResponse> {
        let radius_km = radius_km.unwrap_or(self.search.default_radius_km);
        if radius_km == 0 {
            return Err(AppError::validation_error(
                "search radius must be greater than zero",
            ));
        }

        let reference = self.find_existing(code).await?;

        if radius_km > self.search.max_radius_km {
            info!(
                code,
                radius_km,
                max_radius_km = self.search.max_radius_km,
                "search radius above ceiling, skipping proximity search"
            );
            return Ok(MunicipalityDetailResponse {
                municipality: mapper::map_municipality_to_response(reference),
                radius_km,
                nearby: None,
                alert: Some(mapper::radius_ceiling_alert(self.search.max_radius_km)),
            });
        }

        let nearby =
            proximity::find_nearby_with_distance(&reference, radius_km, self.repo.as_ref()).await?;

        Ok(MunicipalityDetailResponse {
            municipality: mapper::map_municipality_to_response(reference),
            radius_km,
            nearby: Some(
                nearby
                    .into_iter()
                    .map(mapper::map_nearby_to_response)
                    .collect(),
            ),
            alert: None,
        })
    }

    pub async fn count(&self) -> AppResult<MunicipalityCountResponse> {
        let total = self.repo.count().await?;
        Ok(MunicipalityCountResponse { total })
    }

    pub async fn create(
        &self,
        request: CreateMunicipalityRequest,
    ) -> AppResult<MunicipalityResponse> {
        request.validate()?;
        let municipality = mapper::map_create_request(request)?;

        if self.repo.find_by_code(&municipality.code).await?.is_some() {
            return Err(AppError::Conflict(
                "a municipality with this code already exists".to_string(),
            ));
        }

        let created = self.repo.create(&municipality).await?;
        info!(code = %created.code, "municipality created");
        Ok(mapper::map_municipality_to_response(created))
    }

    pub async fn update(
        &self,
        code: &str,
        request: UpdateMunicipalityRequest,
    ) -> AppResult<MunicipalityResponse> {
        request.validate()?;
        let existing = self.find_existing(code).await?;
        let municipality = mapper::map_update_request(&existing.code, request)?;

        let updated = self.repo.update(&municipality).await?;
        info!(code = %updated.code, "municipality updated");
        Ok(mapper::map_municipality_to_response(updated))
    }

    pub async fn delete(&self, code: &str) -> AppResult<()> {
        self.repo.delete(code).await?;
        info!(code, "municipality deleted");
        Ok(())
    }

    async fn find_existing(&self, code: &str) -> AppResult<Municipality> {
        self.repo
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::municipality_not_found(code))
    }
}
