#![forbid(unsafe_code)]

use thiserror::Error;

/// Error enumerates the errors returned by this application.
#[derive(Error, Debug)]
pub enum Errors {
    /// A required environment variable is not set.
    #[error("Unable to read the {} environment variable.", .0)]
    EnvVarNotFound(String),

    /// The startup connection attempt failed; carries the driver's text.
    #[error("Database connection failed: {}", .0)]
    DatabaseConnection(String),

    /// Logging could not be configured.
    #[error("Unable to initialize log4rs logging: {}", .0)]
    LogInitialization(String),

    /// The HTTP listener terminated; the process exits after this.
    #[error("HTTP listener failed: {}", .0)]
    ListenerFailure(String),
}

#[cfg(test)]
mod tests {
    use super::Errors;

    #[test]
    fn connection_error_preserves_driver_text() {
        let e = Errors::DatabaseConnection("connection refused".to_string());
        assert!(format!("{}", e).contains("connection refused"));
    }
}
