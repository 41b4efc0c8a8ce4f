use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{event, Level};

use crate::qr::QrEncodeError;
use crate::wallet::error::WalletError;

#[derive(Error, Debug)]
pub enum DonateError {
    #[error("Invalid amount")]
    InvalidAmount,

    #[error("invoice creation failed: {0}")]
    CreateInvoice(#[from] WalletError),

    #[error("failed to encode qr code: {0}")]
    QrEncode(#[from] QrEncodeError),

    #[error("failed to render page: {0}")]
    RenderPage(#[from] askama::Error),
}

impl IntoResponse for DonateError {
    fn into_response(self) -> Response {
        event!(Level::ERROR, "error in donate handler: {:?}", self);

        // Wallet-service error detail stays in the log. The response body is
        // a fixed message so nothing internal leaks to the client.
        let (status, body) = match self {
            Self::InvalidAmount => (StatusCode::BAD_REQUEST, "Invalid amount"),
            Self::CreateInvoice(_) => (StatusCode::BAD_GATEWAY, "invoice creation failed"),
            Self::QrEncode(_) | Self::RenderPage(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        };

        (status, body).into_response()
    }
}
