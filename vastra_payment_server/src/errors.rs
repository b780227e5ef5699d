use actix_web::{
    error::ResponseError,
    http::{header::ContentType, StatusCode},
    HttpResponse,
};
use razorpay_tools::RazorpayApiError;
use thiserror::Error;
use vastra_payment_engine::{
    db_types::InvalidStatusError,
    traits::{CheckoutError, StoreApiError},
};

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Could not initialize server. {0}")]
    InitializeError(String),
    #[error("An error occurred on the backend of the server. {0}")]
    BackendError(String),
    #[error("Missing or invalid field. {0}")]
    ValidationError(String),
    #[error("Invalid payment signature")]
    InvalidPaymentSignature,
    #[error("{0}")]
    CheckoutError(#[from] CheckoutError),
    #[error("{0}")]
    InvalidStatus(#[from] InvalidStatusError),
    #[error("The payment gateway rejected the request. {0}")]
    GatewayError(#[from] RazorpayApiError),
    #[error("The data was not found. {0}")]
    NoRecordFound(String),
    #[error("An I/O error happened in the server. {0}")]
    IOError(#[from] std::io::Error),
    #[error("UnspecifiedError. {0}")]
    Unspecified(String),
}

impl From<StoreApiError> for ServerError {
    fn from(e: StoreApiError) -> Self {
        match e {
            StoreApiError::NotFound(s) => Self::NoRecordFound(s),
            StoreApiError::QueryError(s) => Self::ValidationError(s),
            StoreApiError::DatabaseError(s) => Self::BackendError(format!("Database error: {s}")),
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::InvalidPaymentSignature => StatusCode::BAD_REQUEST,
            Self::InvalidStatus(_) => StatusCode::BAD_REQUEST,
            Self::CheckoutError(e) => match e {
                CheckoutError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
                _ => StatusCode::BAD_REQUEST,
            },
            Self::GatewayError(_) => StatusCode::BAD_GATEWAY,
            Self::NoRecordFound(_) => StatusCode::NOT_FOUND,
            Self::InitializeError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::BackendError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::IOError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Unspecified(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        // The mismatch payload carries both totals so that clients can show the discrepancy. Everything else gets
        // the standard error envelope.
        let body = match self {
            Self::CheckoutError(CheckoutError::TotalMismatch { calculated, provided }) => serde_json::json!({
                "message": "Total amount mismatch",
                "calculated": calculated,
                "provided": provided,
            }),
            other => serde_json::json!({ "error": other.to_string() }),
        };
        HttpResponse::build(self.status_code()).insert_header(ContentType::json()).body(body.to_string())
    }
}
