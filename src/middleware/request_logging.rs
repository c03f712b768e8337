//! Helpers for the per-request tracing span and access log line.

use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use tracing::Span;

/// Client address as reported by actix.
///
/// `realip_remote_addr()` only honours `Forwarded`/`X-Forwarded-For` when a
/// trusted proxy is configured, so the raw header is never read here.
pub fn get_client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn get_user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string()
}

/// Reuses an incoming `x-request-id` when it looks sane, otherwise mints one.
pub fn resolve_request_id(req: &ServiceRequest) -> String {
    req.headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty() && value.len() <= 64)
        .filter(|value| {
            value
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        })
        .map(str::to_string)
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string())
}

pub fn create_request_span(
    request_id: &str,
    method: &str,
    path: &str,
    client_ip: &str,
    user_agent: &str,
) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id,
        method = %method,
        path = %path,
        client_ip = %client_ip,
        user_agent = %user_agent
    )
}

/// HTTP status class used to group access log lines.
pub fn get_status_class(status: u16) -> &'static str {
    match status {
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => "unknown",
    }
}
