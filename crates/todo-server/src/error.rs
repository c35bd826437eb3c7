use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;
use todo_core::TodoError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Todo(#[from] TodoError),

    /// The request body could not be read as the expected JSON.
    #[error("{0}")]
    BadRequest(String),

    #[error("Not found")]
    RouteNotFound,
}

#[derive(Serialize)]
struct JsonError {
    error: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Todo(TodoError::Validation(_)) => StatusCode::BAD_REQUEST,
            AppError::Todo(TodoError::NotFound(_)) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RouteNotFound => StatusCode::NOT_FOUND,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(JsonError {
            error: self.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: AppError) -> serde_json::Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn maps_todo_errors_to_status_codes() {
        let validation = AppError::from(TodoError::validation("Title is required"));
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(validation).await,
            serde_json::json!({ "error": "Title is required" })
        );

        let missing = AppError::from(TodoError::not_found("abc"));
        assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_of(missing).await,
            serde_json::json!({ "error": "Todo not found" })
        );
    }

    #[actix_web::test]
    async fn route_not_found_has_generic_body() {
        let err = AppError::RouteNotFound;
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(body_of(err).await, serde_json::json!({ "error": "Not found" }));
    }
}
