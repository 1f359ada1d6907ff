use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, message) = match &self {
            ProductError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ProductError::Repository(source) => {
                tracing::error!(error = %source, "product operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, source.to_string())
            }
        };

        (status, Json(ErrorResponse::new(status, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;

    #[test]
    fn should_map_not_found_to_404() {
        let (status, Json(body)) = ProductError::NotFound.into_error_response();

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.status, 404);
        assert_eq!(body.error, "Not Found");
        assert_eq!(body.message, "product.not_found");
    }

    #[test]
    fn should_map_repository_failures_to_500() {
        let (status, Json(body)) =
            ProductError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.status, 500);
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.message, "repository.database_error");
    }
}
