use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            err if err.is_invalid_input() => (StatusCode::BAD_REQUEST, "ValidationError"),
            ProductError::NotFound => (StatusCode::NOT_FOUND, "NotFound"),
            ProductError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden"),
            ProductError::OutOfStock => (StatusCode::CONFLICT, "Conflict"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, ErrorResponse::json(name, self.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_validation_errors_to_bad_request() {
        let (status, json) = ProductError::PriceNotPositive.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.message, "product.price_not_positive");
    }

    #[test]
    fn should_map_each_failure_kind_to_its_status() {
        let cases = [
            (ProductError::NotFound, StatusCode::NOT_FOUND),
            (ProductError::Forbidden, StatusCode::FORBIDDEN),
            (ProductError::OutOfStock, StatusCode::CONFLICT),
            (ProductError::IdMismatch, StatusCode::BAD_REQUEST),
            (ProductError::Rejected, StatusCode::BAD_REQUEST),
            (
                ProductError::Repository(RepositoryError::DatabaseError),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_error_response().0, expected);
        }
    }

    #[test]
    fn should_not_leak_repository_details() {
        let (_, json) = ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(json.0.message, "repository.persistence");
    }
}
