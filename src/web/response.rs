use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use packsite::common::ResourceError;
use packsite::models::ValidationError;
use packsite::services::BlobError;
use packsite::types::ApiEnvelope;

/// Every JSON handler error, rendered as `{ success: false, message }`.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("{0} not found")]
    NotFound(&'static str),

    #[error("{0}")]
    Conflict(String),

    #[error("Too many requests. Please try again later.")]
    TooManyRequests,

    #[error("Internal server error")]
    Internal,
}

impl ApiError {
    /// Logs the cause and hides it from the client.
    pub fn internal(context: &str, err: impl std::fmt::Display) -> Self {
        log::error!("{}: {}", context, err);
        Self::Internal
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::TooManyRequests => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiEnvelope::<()>::failure(self.to_string()))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::BadRequest(err.0)
    }
}

impl From<ResourceError> for ApiError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound(label) => Self::NotFound(label),
            e @ ResourceError::Conflict(_) => Self::Conflict(e.to_string()),
            ResourceError::Database(e) => Self::internal("Database error", e),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::internal("Database error", err)
    }
}

impl From<BlobError> for ApiError {
    fn from(err: BlobError) -> Self {
        match err {
            BlobError::InvalidKey | BlobError::UnsupportedType(_) => {
                Self::BadRequest(err.to_string())
            }
            BlobError::NotFound => Self::NotFound("Upload"),
            BlobError::Io(e) => Self::internal("Blob storage error", e),
        }
    }
}

pub fn ok<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Ok().json(ApiEnvelope::data(data))
}

pub fn created<T: Serialize>(data: T) -> HttpResponse {
    HttpResponse::Created().json(ApiEnvelope::data(data))
}

pub fn done(message: &str) -> HttpResponse {
    HttpResponse::Ok().json(ApiEnvelope::<()>::message(message))
}

#[cfg(test)]
mod tests {
    use actix_web::body::to_bytes;

    use super::*;

    #[actix_web::test]
    async fn errors_render_as_failure_envelope() {
        let resp = ApiError::NotFound("Slider").error_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(resp.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json, serde_json::json!({ "success": false, "message": "Slider not found" }));
    }

    #[test]
    fn resource_errors_map_to_statuses() {
        let cases = [
            (ApiError::from(ResourceError::NotFound("Client")), StatusCode::NOT_FOUND),
            (ApiError::from(ResourceError::Conflict("Service")), StatusCode::CONFLICT),
            (
                ApiError::from(ValidationError("name is required".into())),
                StatusCode::BAD_REQUEST,
            ),
            (ApiError::from(ResourceError::Database(sqlx::Error::RowNotFound)), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.status_code(), status);
        }
    }

    #[test]
    fn internal_errors_hide_details() {
        let err = ApiError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
