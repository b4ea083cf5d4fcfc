use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::price::errors::PriceError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::price::dto::PriceRequestError;

impl IntoErrorResponse for PriceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            PriceError::Validation(err) => {
                (StatusCode::BAD_REQUEST, "ValidationError", err.to_string())
            }
            PriceError::NotFound(err) => (StatusCode::NOT_FOUND, "NotFound", err.to_string()),
            PriceError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence".to_string(),
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

impl IntoErrorResponse for PriceRequestError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new("ValidationError", self.to_string())),
        )
    }
}
