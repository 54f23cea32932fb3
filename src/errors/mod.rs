use thiserror::Error;

/// Failure delivered by a feed loader. These are the only two kinds a caller
/// of `load` ever sees.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadError {
    /// No response was obtained (DNS, refused connection, timeout, ...)
    #[error("connectivity: the feed could not be reached")]
    Connectivity,

    /// A response arrived but could not be turned into feed items
    #[error("invalid data: the feed response was not usable")]
    InvalidData,
}

#[derive(Error, Debug)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid feed URL: {0}")]
    InvalidUrl(String),

    // Network errors
    #[error("HTTP client setup failed: {0}")]
    Http(#[from] reqwest::Error),

    // Loading errors
    #[error("Feed loading failed: {0}")]
    Load(#[from] LoadError),

    #[error("Feed loader stopped without delivering a result")]
    NoResult,

    // Output errors
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_error_messages_name_the_kind() {
        assert!(LoadError::Connectivity.to_string().starts_with("connectivity"));
        assert!(LoadError::InvalidData.to_string().starts_with("invalid data"));
    }

    #[test]
    fn test_app_error_wraps_load_error() {
        let err: AppError = LoadError::InvalidData.into();
        assert!(matches!(err, AppError::Load(LoadError::InvalidData)));
        assert_eq!(
            err.to_string(),
            "Feed loading failed: invalid data: the feed response was not usable"
        );
    }

    #[test]
    fn test_missing_result_is_not_a_config_error() {
        let message = AppError::NoResult.to_string();
        assert_eq!(message, "Feed loader stopped without delivering a result");
        assert!(!message.contains("Configuration"));
    }
}
