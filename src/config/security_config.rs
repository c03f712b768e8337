use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct SecurityConfig {
    #[serde(default = "crate::config::defaults::default_cors_allowed_origins")]
    pub cors_allowed_origins: Vec<String>,
    #[serde(default = "crate::config::defaults::default_metrics_allow_private_only")]
    pub metrics_allow_private_only: bool,
    #[serde(default)]
    pub metrics_admin_token: Option<String>,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            cors_allowed_origins: crate::config::defaults::default_cors_allowed_origins(),
            metrics_allow_private_only: crate::config::defaults::default_metrics_allow_private_only(),
            metrics_admin_token: None,
        }
    }
}
