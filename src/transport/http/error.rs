//! Error responses of the HTTP API.

use crate::transport::http::types::ErrorResponse;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid product ID")]
    InvalidId,

    #[error("Invalid request payload")]
    InvalidPayload,

    #[error("Product not found")]
    NotFound,

    /// Any other database failure; the message is passed through unchanged.
    #[error("{0}")]
    Storage(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidPayload => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Maps a lookup failure, treating a missing row as 404.
    pub fn from_lookup(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => ApiError::NotFound,
            other => ApiError::from(other),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Storage(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %self, "request rejected");
        }
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });
        (status, body).into_response()
    }
}

/// Parses a path id. Only plain ASCII digits that fit an `i32` are accepted.
pub fn parse_product_id(raw: &str) -> ApiResult<i32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::InvalidId);
    }
    raw.parse::<i32>().map_err(|_| ApiError::InvalidId)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        assert_eq!(ApiError::InvalidId.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidPayload.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::NotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::Storage("boom".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn row_not_found_is_404_only_for_lookups() {
        assert!(matches!(ApiError::from_lookup(sqlx::Error::RowNotFound), ApiError::NotFound));
        assert!(matches!(ApiError::from(sqlx::Error::RowNotFound), ApiError::Storage(_)));
    }

    #[test]
    fn storage_message_is_verbatim() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), sqlx::Error::PoolTimedOut.to_string());
    }

    #[test]
    fn product_ids() {
        assert_eq!(parse_product_id("1").unwrap(), 1);
        assert_eq!(parse_product_id("007").unwrap(), 7);
        assert!(matches!(parse_product_id("abc"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_product_id("-1"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_product_id("+1"), Err(ApiError::InvalidId)));
        assert!(matches!(parse_product_id(""), Err(ApiError::InvalidId)));
        assert!(matches!(parse_product_id("99999999999"), Err(ApiError::InvalidId)));
    }
}
