use thiserror::Error;

use crate::gateway::GatewayError;
use crate::notify::NoticeKind;

/// Application-level error type.
/// Every variant ends at a page boundary as a notice; none is fatal.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Backend unavailable: {0}")]
    BackendUnavailable(String),
}

impl From<GatewayError> for AppError {
    fn from(err: GatewayError) -> Self {
        AppError::BackendUnavailable(err.to_string())
    }
}

impl AppError {
    pub fn kind(&self) -> NoticeKind {
        match self {
            AppError::Validation(_) => NoticeKind::ValidationError,
            AppError::BackendUnavailable(_) => NoticeKind::BackendUnavailable,
        }
    }

    /// The text shown to the user. Transport details stay in the logs.
    pub fn user_message(&self, action: &str) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::BackendUnavailable(detail) => {
                tracing::warn!("{action} failed: {detail}");
                format!("Failed to {action}. Make sure the API is running.")
            }
        }
    }
}
