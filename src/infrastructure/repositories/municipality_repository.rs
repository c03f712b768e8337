use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::Municipality;
use crate::error::{AppError, AppResult};

use super::traits::MunicipalityRepository;

pub struct MunicipalityRepositoryImpl {
    pool: PgPool,
}

impl MunicipalityRepositoryImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MunicipalityRepository for MunicipalityRepositoryImpl {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Municipality>> {
        let municipality = sqlx::query_as::<_, Municipality>(
            "SELECT code, name, postal_code, latitude, longitude FROM municipalities WHERE code = $1",
        )
        .bind(code)
        .fetch_optional(&self.pool)
        .await?;
        Ok(municipality)
    }

    async fn find_by_latitude_and_longitude_range(
        &self,
        lat_min: f64,
        lat_max: f64,
        lon_min: f64,
        lon_max: f64,
    ) -> AppResult<Vec<Municipality>> {
        let municipalities = sqlx::query_as::<_, Municipality>(
            r#"
            SELECT code, name, postal_code, latitude, longitude
            FROM municipalities
            WHERE latitude BETWEEN $1 AND $2
              AND longitude BETWEEN $3 AND $4
            ORDER BY code ASC
            "#,
        )
        .bind(lat_min)
        .bind(lat_max)
        .bind(lon_min)
        .bind(lon_max)
        .fetch_all(&self.pool)
        .await?;
        Ok(municipalities)
    }

    async fn count(&self) -> AppResult<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM municipalities")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    async fn create(&self, municipality: &Municipality) -> AppResult<Municipality> {
        let created = sqlx::query_as::<_, Municipality>(
            r#"
            INSERT INTO municipalities (code, name, postal_code, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING code, name, postal_code, latitude, longitude
            "#,
        )
        .bind(&municipality.code)
        .bind(&municipality.name)
        .bind(&municipality.postal_code)
        .bind(municipality.latitude)
        .bind(municipality.longitude)
        .fetch_one(&self.pool)
        .await?;
        Ok(created)
    }

    async fn update(&self, municipality: &Municipality) -> AppResult<Municipality> {
        let updated = sqlx::query_as::<_, Municipality>(
            r#"
            UPDATE municipalities
            SET name = $2, postal_code = $3, latitude = $4, longitude = $5
            WHERE code = $1
            RETURNING code, name, postal_code, latitude, longitude
            "#,
        )
        .bind(&municipality.code)
        .bind(&municipality.name)
        .bind(&municipality.postal_code)
        .bind(municipality.latitude)
        .bind(municipality.longitude)
        .fetch_optional(&self.pool)
        .await?;
        updated.ok_or_else(|| AppError::municipality_not_found(&municipality.code))
    }

    async fn delete(&self, code: &str) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM municipalities WHERE code = $1")
            .bind(code)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::municipality_not_found(code));
        }
        Ok(())
    }
}
