use tracing::error;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Request metadata attached to a captured server error.
#[derive(Debug, Clone, Copy)]
pub struct FailedRequest<'a> {
    pub method: &'a str,
    pub path: &'a str,
    pub status: u16,
    pub request_id: &'a str,
}

/// Logs a 5xx response under a fresh event id so it can be found in the logs
/// from the id returned to operators.
pub fn capture_unexpected_5xx(request: FailedRequest<'_>) -> AppResult<Uuid> {
    if request.status < 500 {
        return Err(AppError::BadRequest(format!(
            "status {} is not a server error",
            request.status
        )));
    }

    let event_id = Uuid::new_v4();
    error!(
        event_id = %event_id,
        request_id = %request.request_id,
        method = %request.method,
        path = %request.path,
        status = request.status,
        "unexpected server error"
    );
    Ok(event_id)
}
