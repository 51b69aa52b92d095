use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Remote service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Remote service rejected request ({status}): {body}")]
    RemoteRejected { status: u16, body: String },

    #[error("Not found remotely: {0}")]
    NotFoundRemotely(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Crypto error: {0}")]
    Crypto(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// True when the failure came from the remote side and the caller may
    /// still fall back to a local-only commit.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            AppError::RemoteUnavailable(_)
                | AppError::RemoteRejected { .. }
                | AppError::NotFoundRemotely(_)
        )
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<sqlx::migrate::MigrateError> for AppError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        AppError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<String> for AppError {
    fn from(err: String) -> Self {
        AppError::Internal(err)
    }
}

impl From<&str> for AppError {
    fn from(err: &str) -> Self {
        AppError::Internal(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_failures_are_recoverable() {
        assert!(AppError::RemoteUnavailable("timeout".into()).is_remote());
        assert!(AppError::RemoteRejected {
            status: 500,
            body: "oops".into()
        }
        .is_remote());
        assert!(!AppError::Database("disk full".into()).is_remote());
    }

    #[test]
    fn display_includes_status() {
        let err = AppError::RemoteRejected {
            status: 422,
            body: "bad payload".into(),
        };
        assert_eq!(
            err.to_string(),
            "Remote service rejected request (422): bad payload"
        );
    }
}
