use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use sqlx::PgPool;

use crate::application::MunicipalityService;
use crate::config::SecurityConfig;
use crate::error::{AppError, AppResult};
use crate::observability::AppMetrics;

pub mod municipalities;

#[derive(Clone)]
pub struct AppState {
    pub municipality_service: Arc<MunicipalityService>,
    pub security: SecurityConfig,
    pub metrics: Arc<AppMetrics>,
    pub db_pool: PgPool,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/api/v1").configure(municipalities::configure))
        .route("/health", web::get().to(health))
        .route("/ready", web::get().to(ready))
        .route("/metrics", web::get().to(metrics));
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed")
    ),
    tag = "health"
)]
pub(crate) async fn health() -> &'static str {
    "ok"
}

#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Readiness check passed"),
        (status = 503, description = "Service not ready"),
    ),
    tag = "health"
)]
pub(crate) async fn ready(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .map_err(|e| AppError::ServiceUnavailable {
            service: "database".to_string(),
            message: format!("Service not ready: {e}"),
        })?;
    Ok(HttpResponse::Ok().body("ready"))
}

async fn metrics(state: web::Data<AppState>, request: HttpRequest) -> AppResult<HttpResponse> {
    let has_admin_token = state
        .security
        .metrics_admin_token
        .as_deref()
        .filter(|token| !token.is_empty())
        .is_some_and(|token| {
            request
                .headers()
                .get("x-admin-token")
                .and_then(|value| value.to_str().ok())
                == Some(token)
        });

    if !has_admin_token && state.security.metrics_allow_private_only {
        let ip = request
            .peer_addr()
            .map(|addr| addr.ip())
            .ok_or(AppError::Unauthorized)?;

        if !is_private_or_loopback(ip) {
            return Err(AppError::Unauthorized);
        }
    }

    Ok(HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(
            state
                .metrics
                .render_prometheus(state.db_pool.size(), state.db_pool.num_idle()),
        ))
}

fn is_private_or_loopback(ip: std::net::IpAddr) -> bool {
    match ip {
        std::net::IpAddr::V4(v4) => v4.is_private() || v4.is_loopback(),
        std::net::IpAddr::V6(v6) => v6.is_loopback() || v6.is_unique_local(),
    }
}
