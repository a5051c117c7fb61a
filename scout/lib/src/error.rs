/// Error types for the Scout library.
///
/// A non-200 status is not an error: it is reported through
/// [`QueryOutcome::Failed`](crate::QueryOutcome::Failed). These variants
/// cover everything that prevents an outcome from being produced at all.
#[derive(Debug, thiserror::Error)]
pub enum ScoutError {
    /// No API key was supplied (unset or blank `SCRAPINGDOG_API_KEY`).
    #[error("missing API key: set SCRAPINGDOG_API_KEY")]
    MissingApiKey,

    /// A configuration or query value was rejected before sending.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The request could not complete (DNS, connect, timeout, ...).
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 200 but the body was not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type for Scout operations.
pub type Result<T> = std::result::Result<T, ScoutError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_api_key_names_variable() {
        let display = ScoutError::MissingApiKey.to_string();
        assert!(display.contains("SCRAPINGDOG_API_KEY"));
    }

    #[test]
    fn test_invalid_config_display() {
        let error = ScoutError::InvalidConfig("linkId must not be empty".to_string());
        let display = format!("{}", error);
        assert!(display.contains("invalid configuration"));
        assert!(display.contains("linkId"));
    }

    #[test]
    fn test_invalid_json_from_serde() {
        let parse_err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let error: ScoutError = parse_err.into();
        assert!(matches!(error, ScoutError::InvalidJson(_)));
    }

    #[test]
    fn test_io_error_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let error: ScoutError = io_err.into();
        assert!(matches!(error, ScoutError::Io(_)));
        assert!(error.to_string().starts_with("IO error"));
    }
}
