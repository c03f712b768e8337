use serde::Serialize;
use utoipa::ToSchema;

/// Standard error response structure for API errors
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error label (e.g., "Bad request", "Not found")
    pub error: String,
    /// Human-readable error message
    pub message: String,
    /// Machine-readable error code (e.g., "NOT_FOUND")
    pub code: String,
}
