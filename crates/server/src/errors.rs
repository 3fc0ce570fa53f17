use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use service::errors::ServiceError;
use tracing::{error, warn};

/// Transport-side wrapper deciding the status code for a service failure.
///
/// Not-found and validation errors become `400` with the message as a plain
/// text body; anything else is a `500` whose detail only goes to the log.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self { Self(e) }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        if err.is_client_error() {
            warn!(code = err.code(), kind = err.kind(), error = %err, "request_rejected");
            (StatusCode::BAD_REQUEST, err.to_string()).into_response()
        } else {
            error!(code = err.code(), kind = err.kind(), error = %err, "request_failed");
            (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn domain_errors_map_to_bad_request() {
        let resp = ApiError(ServiceError::CategoryNotFound(Uuid::new_v4())).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let resp = ApiError(ServiceError::Validation(vec!["x".into()])).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn backend_errors_map_to_internal_error() {
        let resp = ApiError(ServiceError::Db("connection reset".into())).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
