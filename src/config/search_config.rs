use serde::Deserialize;

use super::ConfigError;

/// Radius policy applied by the HTTP layer before any proximity search runs.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    #[serde(default = "crate::config::defaults::default_search_radius_km")]
    pub default_radius_km: u32,
    #[serde(default = "crate::config::defaults::default_max_search_radius_km")]
    pub max_radius_km: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_km: crate::config::defaults::default_search_radius_km(),
            max_radius_km: crate::config::defaults::default_max_search_radius_km(),
        }
    }
}

impl SearchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_radius_km == 0 {
            return Err(ConfigError::Search(
                "max_radius_km must be greater than zero".to_string(),
            ));
        }
        if self.default_radius_km == 0 {
            return Err(ConfigError::Search(
                "default_radius_km must be greater than zero".to_string(),
            ));
        }
        if self.default_radius_km > self.max_radius_km {
            return Err(ConfigError::Search(format!(
                "default_radius_km ({}) cannot exceed max_radius_km ({})",
                self.default_radius_km, self.max_radius_km
            )));
        }
        Ok(())
    }
}
