use std::convert::Infallible;

use axum::{
    response::{IntoResponse, Response},
    BoxError, Json,
};
use http::StatusCode;
use serde_derive::{Deserialize, Serialize};
use serde_json::json;
use solana_program::pubkey::ParsePubkeyError;
use stake_delegation_sdk::models::errors::StakeTransactionError;
use thiserror::Error;
use tracing::error;

pub const GENERATE_STAKE_TRANSACTION_FAILED: &str = "Failed to generate stake transaction";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid request body")]
    InvalidRequestBody(#[from] serde_json::Error),

    #[error("Parse Pubkey Error")]
    ParsePubkeyError(#[from] ParsePubkeyError),

    #[error("Stake Transaction Error")]
    StakeTransactionError(#[from] StakeTransactionError),
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Error {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::MissingParameter(name) => (
                StatusCode::BAD_REQUEST,
                format!("Missing required parameter: {name}"),
            ),
            ApiError::InvalidRequestBody(e) => {
                error!("Error generating stake transaction, invalid request body: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATE_STAKE_TRANSACTION_FAILED.to_string(),
                )
            }
            // Malformed addresses are reported like any other failure, not as a client error
            ApiError::ParsePubkeyError(e) => {
                error!("Error generating stake transaction, parse pubkey error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATE_STAKE_TRANSACTION_FAILED.to_string(),
                )
            }
            ApiError::StakeTransactionError(e) => {
                error!("Error generating stake transaction: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    GENERATE_STAKE_TRANSACTION_FAILED.to_string(),
                )
            }
        };
        (
            status,
            Json(Error {
                error: error_message,
            }),
        )
            .into_response()
    }
}

pub async fn handle_error(error: BoxError) -> std::result::Result<impl IntoResponse, Infallible> {
    if error.is::<tower::timeout::error::Elapsed>() {
        return Ok((
            StatusCode::REQUEST_TIMEOUT,
            Json(json!({
                "code" : 408,
                "error" : "Request Timeout",
            })),
        ));
    };
    if error.is::<tower::load_shed::error::Overloaded>() {
        return Ok((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "code" : 503,
                "error" : "Service Unavailable",
            })),
        ));
    }

    Ok((
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "code" : 500,
            "error" : "Internal Server Error",
        })),
    ))
}
