use std::sync::Arc;
use std::time::Instant;

use actix_web::dev::Service as _;
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, App, HttpServer};
use communes_backend::api::openapi::configure_swagger_ui;
use communes_backend::api::routes::{self, AppState};
use communes_backend::application::MunicipalityService;
use communes_backend::config::AppConfig;
use communes_backend::infrastructure::db::{migrations::run_migrations, pool::create_pool};
use communes_backend::infrastructure::repositories::MunicipalityRepositoryImpl;
use communes_backend::middleware::request_logging::{
    create_request_span, get_client_ip, get_status_class, get_user_agent, resolve_request_id,
};
use communes_backend::observability::error_tracking::{capture_unexpected_5xx, FailedRequest};
use communes_backend::observability::AppMetrics;
use communes_backend::security::{cors_middleware, security_headers};
use tracing::{info, warn, Instrument};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().expect("failed to load application configuration");
    config
        .validate()
        .expect("application configuration is invalid");

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.logging.level.clone()));
    let (json_layer, plain_layer) = if config.logging.json_format {
        (
            Some(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            ),
            None,
        )
    } else {
        (None, Some(fmt::layer()))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(plain_layer)
        .init();

    let pool = create_pool(&config.database)
        .await
        .expect("failed to create database pool");

    run_migrations(&pool)
        .await
        .expect("database migrations failed");

    let municipality_repo = Arc::new(MunicipalityRepositoryImpl::new(pool.clone()));
    let state = AppState {
        municipality_service: Arc::new(MunicipalityService::new(
            municipality_repo,
            config.search,
        )),
        security: config.security.clone(),
        metrics: Arc::new(AppMetrics::default()),
        db_pool: pool.clone(),
    };

    let bind_host = config.app.host.clone();
    let bind_port = config.app.port;
    let security_config = config.security.clone();
    let metrics = state.metrics.clone();

    info!(
        host = %bind_host,
        port = bind_port,
        environment = %config.app.environment,
        default_radius_km = config.search.default_radius_km,
        max_radius_km = config.search.max_radius_km,
        "starting http server"
    );

    HttpServer::new(move || {
        let metrics = metrics.clone();
        App::new()
            .wrap_fn(move |req, srv| {
                let request_id = resolve_request_id(&req);
                let path = req.path().to_string();
                let method = req.method().to_string();
                let span = create_request_span(
                    &request_id,
                    &method,
                    &path,
                    &get_client_ip(&req),
                    &get_user_agent(&req),
                );
                let metrics = metrics.clone();
                let start = Instant::now();

                let fut = srv.call(req);
                async move {
                    let mut response = fut.await?;
                    response.headers_mut().insert(
                        HeaderName::from_static("x-request-id"),
                        HeaderValue::from_str(&request_id)
                            .unwrap_or_else(|_| HeaderValue::from_static("invalid-request-id")),
                    );

                    let status = response.status().as_u16();
                    let latency_ms = start.elapsed().as_millis() as u64;
                    metrics.record_request(status, latency_ms);

                    info!(
                        status = status,
                        status_class = get_status_class(status),
                        latency_ms = latency_ms,
                        "request completed"
                    );

                    if status >= 500 {
                        let failed = FailedRequest {
                            method: &method,
                            path: &path,
                            status,
                            request_id: &request_id,
                        };
                        if let Err(error) = capture_unexpected_5xx(failed) {
                            warn!(error = %error, "failed to capture server error");
                        }
                    }
                    Ok::<_, actix_web::Error>(response)
                }
                .instrument(span)
            })
            .wrap(cors_middleware(&security_config))
            .wrap(security_headers())
            .app_data(web::Data::new(state.clone()))
            .configure(routes::configure)
            .configure(configure_swagger_ui)
    })
    .bind((bind_host, bind_port))?
    .run()
    .await
}
