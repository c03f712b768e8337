use async_trait::async_trait;
use communes_backend::application::proximity::BoundingBox;
use communes_backend::domain::Municipality;
use communes_backend::error::{AppError, AppResult};
use communes_backend::infrastructure::repositories::MunicipalityRepository;
use std::sync::Mutex;

/// Range bounds recorded for each call: `(lat_min, lat_max, lon_min, lon_max)`.
pub type RangeQuery = (f64, f64, f64, f64);

#[derive(Default)]
pub struct MockMunicipalityRepo {
    pub municipalities: Mutex<Vec<Municipality>>,
    pub range_queries: Mutex<Vec<RangeQuery>>,
}

impl MockMunicipalityRepo {
    pub fn with(municipalities: Vec<Municipality>) -> Self {
        Self {
            municipalities: Mutex::new(municipalities),
            range_queries: Mutex::new(Vec::new()),
        }
    }

    pub fn push(&self, municipality: Municipality) {
        self.municipalities
            .lock()
            .expect("municipalities mutex poisoned")
            .push(municipality);
    }

    pub fn stored(&self, code: &str) -> Option<Municipality> {
        self.municipalities
            .lock()
            .expect("municipalities mutex poisoned")
            .iter()
            .find(|municipality| municipality.code == code)
            .cloned()
    }

    pub fn range_queries(&self) -> Vec<RangeQuery> {
        self.range_queries
            .lock()
            .expect("range_queries mutex poisoned")
            .clone()
    }
}

#[async_trait]
impl MunicipalityRepository for MockMunicipalityRepo {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Municipality>> {
        Ok(self
            .municipalities
            .lock()
            .expect("municipalities mutex poisoned")
            .iter()
            .find(|municipality| municipality.code == code)
            .cloned())
    }

    async fn find_by_latitude_and_longitude_range(
        &self,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> AppResult<Vec<Municipality>> {
        self.range_queries
            .lock()
            .expect("range_queries mutex poisoned")
            .push((lat_min, lat_max, lon_min, lon_max));

        let bbox = BoundingBox {
            lat_min,
            lat_max,
            lon_min,
            lon_max,
        };
        let mut rows: Vec<Municipality> = self
            .municipalities
            .lock()
            .expect("municipalities mutex poisoned")
            .iter()
            .filter(|m| bbox.contains(m.location()))
            .cloned()
            .collect();
        rows.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(rows)
    }

    async fn count(&self) -> AppResult<i64> {
        Ok(self
            .municipalities
            .lock()
            .expect("municipalities mutex poisoned")
            .len() as i64)
    }

    async fn create(&self, municipality: &Municipality) -> AppResult<Municipality> {
        let mut rows = self
            .municipalities
            .lock()
            .expect("municipalities mutex poisoned");
        if rows.iter().any(|existing| existing.code == municipality.code) {
            return Err(AppError::Conflict(
                "a municipality with this code already exists".to_string(),
            ));
        }
        rows.push(municipality.clone());
        Ok(municipality.clone())
    }

    async fn update(&self, municipality: &Municipality) -> AppResult<Municipality> {
        let mut rows = self
            .municipalities
            .lock()
            .expect("municipalities mutex poisoned");
        let existing = rows
            .iter_mut()
            .find(|existing| existing.code == municipality.code)
            .ok_or_else(|| AppError::municipality_not_found(&municipality.code))?;
        *existing = municipality.clone();
        Ok(municipality.clone())
    }

    async fn delete(&self, code: &str) -> AppResult<()> {
        let mut rows = self
            .municipalities
            .lock()
            .expect("municipalities mutex poisoned");
        let before = rows.len();
        rows.retain(|municipality| municipality.code != code);
        if rows.len() == before {
            return Err(AppError::municipality_not_found(code));
        }
        Ok(())
    }
}

/// Store whose range lookup always fails, for error propagation tests.
#[derive(Default)]
pub struct FailingMunicipalityRepo {
    pub reference: Option<Municipality>,
}

#[async_trait]
impl MunicipalityRepository for FailingMunicipalityRepo {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Municipality>> {
        Ok(self.reference.clone().filter(|m| m.code == code))
    }

    async fn find_by_latitude_and_longitude_range(
        &self,
        _lat_min: f64,
        _lat_max: f64,
        _lon_min: f64,
        _lon_max: f64,
    ) -> AppResult<Vec<Municipality>> {
        Err(AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: "connection refused".to_string(),
        })
    }
}
