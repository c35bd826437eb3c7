pub mod root;
pub mod todos;

use actix_web::HttpRequest;

use crate::error::AppError;
use crate::middleware::request_id::extract_request_id;

/// Catch-all for unmatched paths and unmatched methods on known paths.
pub async fn not_found(req: HttpRequest) -> Result<actix_web::HttpResponse, AppError> {
    log::debug!("No route for {} {}", req.method(), req.path());
    Err(AppError::RouteNotFound)
}

pub(crate) fn log_failure(req: &HttpRequest, err: &AppError) {
    log::warn!(
        "[{}] {} {} failed: {}",
        extract_request_id(req).unwrap_or_else(|| "-".to_string()),
        req.method(),
        req.path(),
        err
    );
}
