use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::distance::distance_km;
use super::errors::DomainError;

static CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9][0-9AB][0-9]{3}$").expect("code pattern is valid"));
static POSTAL_CODE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("postal code pattern is valid"));
static NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\-' ]+[0-9]{0,2}$").expect("name pattern is valid"));

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    /// Builds a point from untrusted input, rejecting out-of-range coordinates.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, DomainError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(DomainError::ValidationError(
                "latitude must be between -90 and 90".to_string(),
            ));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(DomainError::ValidationError(
                "longitude must be between -180 and 180".to_string(),
            ));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn distance_km_to(&self, other: GeoPoint) -> u64 {
        distance_km(*self, other)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Municipality {
    pub code: String,
    pub name: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl Municipality {
    /// Validates every field and builds the record.
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        postal_code: impl Into<String>,
        location: GeoPoint,
    ) -> Result<Self, DomainError> {
        let municipality = Self {
            code: code.into(),
            name: name.into(),
            postal_code: postal_code.into(),
            latitude: location.latitude,
            longitude: location.longitude,
        };
        municipality.validate()?;
        Ok(municipality)
    }

    pub fn location(&self) -> GeoPoint {
        GeoPoint {
            latitude: self.latitude,
            longitude: self.longitude,
        }
    }

    pub fn distance_km_to(&self, other: &Municipality) -> u64 {
        distance_km(self.location(), other.location())
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        validate_code(&self.code)?;
        validate_name(&self.name)?;
        validate_postal_code(&self.postal_code)?;
        GeoPoint::new(self.latitude, self.longitude)?;
        Ok(())
    }
}

pub fn validate_code(code: &str) -> Result<(), DomainError> {
    if CODE_PATTERN.is_match(code) {
        Ok(())
    } else {
        Err(DomainError::ValidationError(
            "code must contain 5 digits (the second may be A or B for Corsica)".to_string(),
        ))
    }
}

pub fn validate_postal_code(postal_code: &str) -> Result<(), DomainError> {
    if POSTAL_CODE_PATTERN.is_match(postal_code) {
        Ok(())
    } else {
        Err(DomainError::ValidationError(
            "postal code must contain 5 digits".to_string(),
        ))
    }
}

pub fn validate_name(name: &str) -> Result<(), DomainError> {
    if NAME_PATTERN.is_match(name) {
        Ok(())
    } else {
        Err(DomainError::ValidationError(
            "name may only contain letters, hyphens, apostrophes, spaces and an optional district number"
                .to_string(),
        ))
    }
}
