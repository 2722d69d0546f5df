use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug)]
pub enum HttpError {
    BadRequest(String),
    NotFound(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ServiceError> for HttpError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => HttpError::NotFound("Not found".into()),
                RepositoryError::Unavailable(msg) => {
                    HttpError::ServiceUnavailable(format!("Storage unavailable: {msg}"))
                }
                RepositoryError::Custom(msg) => HttpError::Internal(msg),
            },
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, msg) = match self {
            HttpError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            HttpError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            HttpError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            HttpError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".into(),
            message: msg,
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    #[test]
    fn not_found_maps_to_404() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::NotFound));
        assert!(matches!(err, HttpError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn unavailable_storage_maps_to_503() {
        let err = HttpError::from(ServiceError::Repo(RepositoryError::Unavailable(
            "lock poisoned".into(),
        )));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn custom_repository_error_maps_to_500() {
        let internal = HttpError::from(ServiceError::Repo(RepositoryError::Custom(
            "Failed to generate id".into(),
        )));
        assert_eq!(
            internal.into_response().status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn bad_request_maps_to_400() {
        let bad = HttpError::BadRequest("id mismatch".into());
        assert_eq!(bad.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn error_body_uses_status_error() {
        let response = HttpError::NotFound("Product not found".into()).into_response();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(body.status, "error");
        assert_eq!(body.message, "Product not found");
    }
}
