use actix_web::{HttpResponse, http::StatusCode};
use serde_json::json;

/// Error taxonomy shared by every handler.
///
/// Validation and not-found conditions carry a client-facing message; the
/// Database variant is logged where it is caught and surfaces as a generic
/// 500 so driver details never leak to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Duplicate(String),

    #[error("{0}")]
    Validation(String),

    #[error("Incorrect password")]
    CredentialMismatch,

    #[error("Internal Server Error")]
    Database(#[from] sqlx::Error),

    #[error("Internal Server Error")]
    Internal,
}

impl ApiError {
    /// Maps a failed INSERT to Duplicate when Postgres reports a
    /// unique-constraint violation (SQLSTATE 23505).
    pub fn from_insert(e: sqlx::Error, duplicate_msg: &str) -> Self {
        if let sqlx::Error::Database(db_err) = &e {
            if db_err.code().as_deref() == Some("23505") {
                return ApiError::Duplicate(duplicate_msg.to_string());
            }
        }
        ApiError::Database(e)
    }
}

impl actix_web::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Duplicate(_) | ApiError::Validation(_) | ApiError::CredentialMismatch => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Database(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "message": self.to_string()
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn status_codes_follow_the_taxonomy() {
        assert_eq!(
            ApiError::NotFound("x".into()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::Duplicate("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Validation("x".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::CredentialMismatch.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::Internal.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn duplicate_user_responds_with_bad_request() {
        let err = ApiError::Duplicate("Username or email already exists".into());
        let resp = err.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_surface_as_generic_500() {
        let err = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal Server Error");
    }

    #[test]
    fn row_not_found_is_not_a_duplicate() {
        let err = ApiError::from_insert(sqlx::Error::RowNotFound, "taken");
        assert!(matches!(err, ApiError::Database(_)));
    }
}
