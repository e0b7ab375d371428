//! Mapping of domain errors to HTTP responses.

use super::StatusBody;
use crate::customer_actor::CustomerError;
use crate::item_actor::ItemError;
use crate::order_actor::OrderError;
use axum::extract::multipart::MultipartError;
use axum::extract::rejection::JsonRejection;
use axum::extract::multipart::MultipartRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::{error, warn};

/// Everything a handler can fail with.
///
/// | Error | Status |
/// |---|---|
/// | validation, malformed body, `InvalidOrder` | 400 |
/// | body over `server.max_upload_bytes` | 413 |
/// | `InsufficientStock`, `InsufficientCash` | 400 |
/// | any not found, including an order's customer or item | 404 |
/// | `HasOrders` | 409 |
/// | actor communication failures | 500 |
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Request body is too large")]
    PayloadTooLarge,

    #[error(transparent)]
    Customer(#[from] CustomerError),

    #[error(transparent)]
    Item(#[from] ItemError),

    #[error(transparent)]
    Order(#[from] OrderError),
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            ApiError::Customer(CustomerError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Customer(CustomerError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Customer(CustomerError::HasOrders { .. }) => StatusCode::CONFLICT,
            ApiError::Customer(CustomerError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::Item(ItemError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Item(ItemError::InsufficientStock { .. } | ItemError::Validation(_)) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Item(ItemError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            ApiError::Order(
                OrderError::NotFound(_)
                | OrderError::CustomerNotFound(_)
                | OrderError::ItemNotFound(_),
            ) => StatusCode::NOT_FOUND,
            ApiError::Order(
                OrderError::InsufficientStock { .. }
                | OrderError::InsufficientCash { .. }
                | OrderError::InvalidOrder(_),
            ) => StatusCode::BAD_REQUEST,
            ApiError::Order(OrderError::ActorCommunicationError(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<&'static str> for ApiError {
    fn from(message: &'static str) -> Self {
        Self::bad_request(message)
    }
}

/// Extractor failures keep a 413 from the body limit; everything else is a 400.
fn rejected(status: StatusCode, body_text: String) -> ApiError {
    if status == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge
    } else {
        ApiError::BadRequest(body_text)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartRejection> for ApiError {
    fn from(rejection: MultipartRejection) -> Self {
        rejected(rejection.status(), rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        rejected(e.status(), e.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            error!(error = %self, "Request failed");
            "Internal server error".to_string()
        } else {
            warn!(status = status.as_u16(), error = %self, "Request rejected");
            self.to_string()
        };
        (status, Json(StatusBody::error(message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases: Vec<(ApiError, StatusCode)> = vec![
            (ApiError::bad_request("nope"), StatusCode::BAD_REQUEST),
            (ApiError::PayloadTooLarge, StatusCode::PAYLOAD_TOO_LARGE),
            (CustomerError::NotFound("C".into()).into(), StatusCode::NOT_FOUND),
            (
                CustomerError::HasOrders { id: "C".into(), count: 1 }.into(),
                StatusCode::CONFLICT,
            ),
            (ItemError::Validation("x".into()).into(), StatusCode::BAD_REQUEST),
            (
                ItemError::ActorCommunicationError("closed".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (OrderError::ItemNotFound("I".into()).into(), StatusCode::NOT_FOUND),
            (
                OrderError::InsufficientCash { total: 2.0, cash: 1.0 }.into(),
                StatusCode::BAD_REQUEST,
            ),
            (
                OrderError::InsufficientStock {
                    code: "I".into(),
                    requested: 2,
                    available: 1,
                }
                .into(),
                StatusCode::BAD_REQUEST,
            ),
            (OrderError::InvalidOrder("x".into()).into(), StatusCode::BAD_REQUEST),
        ];

        for (err, expected) in cases {
            assert_eq!(err.status(), expected, "{}", err);
        }
    }

    #[test]
    fn test_rejections_keep_the_body_limit_status() {
        let err = rejected(StatusCode::PAYLOAD_TOO_LARGE, "failed to read stream".into());
        assert_eq!(err.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(err.to_string(), "Request body is too large");

        let err = rejected(StatusCode::UNPROCESSABLE_ENTITY, "missing field `price`".into());
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), "missing field `price`");
    }

    #[test]
    fn test_validation_message_is_passed_through() {
        let err: ApiError = CustomerError::Validation("Mobile must be exactly 10 digits".into()).into();
        assert_eq!(err.to_string(), "Mobile must be exactly 10 digits");
    }
}
