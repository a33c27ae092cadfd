//! CLI error types.

use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by CLI commands.
///
/// Solver outcomes (including rejected input) are never errors; they are
/// printed like any other result.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reading input failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Batch input or JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// `check` found scenarios whose output did not match
    #[error("Self-test failed: {0} scenario(s) did not match")]
    SelfTest(usize),
}

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: CliError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
        assert_eq!(err.to_string(), "I/O error: missing");
        assert_eq!(
            CliError::SelfTest(2).to_string(),
            "Self-test failed: 2 scenario(s) did not match"
        );
    }

    #[test]
    fn test_config_error_converts() {
        let err: CliError = ConfigError::InvalidFormat("xml".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
    }
}
