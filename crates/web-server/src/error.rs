use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use ledger::LedgerError;
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Converts our custom `AppError` into an HTTP response.
///
/// The four recoverable ledger failures map to client-facing status codes
/// with their own messages; corruption is reported as a generic 500 and
/// logged loudly, since the detail is an internal matter.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::Ledger(ledger_err) => match &ledger_err {
                LedgerError::UnknownFund(_) => (StatusCode::NOT_FOUND, ledger_err.to_string()),
                LedgerError::AlreadySubscribed { .. } | LedgerError::NotSubscribed(_) => {
                    (StatusCode::CONFLICT, ledger_err.to_string())
                }
                LedgerError::InsufficientBalance { .. } => {
                    (StatusCode::BAD_REQUEST, ledger_err.to_string())
                }
                LedgerError::StateCorruption(_) => {
                    tracing::error!(error = ?ledger_err, "Ledger state corruption.");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "An internal ledger error occurred".to_string(),
                    )
                }
            },
            AppError::NotFound(message) => (StatusCode::NOT_FOUND, message),
        };

        let body = Json(json!({ "error": error_message }));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn status_for(err: LedgerError) -> StatusCode {
        AppError::from(err).into_response().status()
    }

    #[test]
    fn ledger_failures_map_to_documented_status_codes() {
        assert_eq!(status_for(LedgerError::UnknownFund(9)), StatusCode::NOT_FOUND);
        assert_eq!(
            status_for(LedgerError::AlreadySubscribed {
                fund_id: 1,
                name: "DEUDAPRIVADA".to_string(),
            }),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(LedgerError::NotSubscribed(1)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            status_for(LedgerError::InsufficientBalance {
                fund_id: 4,
                required: dec!(250_000),
                available: dec!(100_000),
            }),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(LedgerError::StateCorruption("broken".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn missing_resources_are_not_found() {
        let status = AppError::NotFound("fund 9 does not exist".to_string())
            .into_response()
            .status();
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
