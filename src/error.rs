//! Error handling for nick-forge

use thiserror::Error;

/// Main error type for nick-forge
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NickForgeError {
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error(
        "Could not generate {requested} unique nicknames in {attempts} attempts (got {accepted})"
    )]
    NotEnoughUnique {
        requested: usize,
        accepted: usize,
        attempts: usize,
    },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Parse error: {message}")]
    Parse {
        message: String,
        content: Option<String>,
    },

    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },
}

impl NickForgeError {
    /// Create an invalid request error
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Create a retry budget exhaustion error
    pub fn not_enough_unique(requested: usize, accepted: usize, attempts: usize) -> Self {
        Self::NotEnoughUnique {
            requested,
            accepted,
            attempts,
        }
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a parse error
    pub fn parse(message: impl Into<String>, content: Option<String>) -> Self {
        Self::Parse {
            message: message.into(),
            content,
        }
    }

    /// Create an IO error
    pub fn io(message: impl Into<String>, path: Option<String>) -> Self {
        Self::Io {
            message: message.into(),
            path,
        }
    }

    /// Whether the caller rejected the request before any generation happened
    pub fn is_invalid_request(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. })
    }

    /// None of the failures are transient: repeating the same call with the
    /// same parameters fails the same way.
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Get user-friendly error message with suggestions
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidRequest { message } => {
                format!("❌ Invalid request: {}\n💡 Use --help for usage information", message)
            }
            Self::NotEnoughUnique {
                requested,
                accepted,
                attempts,
            } => {
                format!(
                    "❌ Only {} of {} unique nicknames after {} attempts\n💡 Request fewer nicknames or pick a style with a larger vocabulary",
                    accepted, requested, attempts
                )
            }
            Self::Config { message } => {
                format!("❌ Configuration problem: {}\n💡 Check word lists, percentages and ranges", message)
            }
            Self::Parse { message, .. } => {
                format!("❌ Parse error: {}\n💡 Check the configuration file format", message)
            }
            Self::Io { message, path } => {
                let path_info = path.as_ref().map_or(String::new(), |p| format!(" ({})", p));
                format!("❌ File error{}: {}\n💡 Check file permissions and paths", path_info, message)
            }
        }
    }
}

impl From<serde_json::Error> for NickForgeError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(err.to_string(), None)
    }
}

impl From<std::io::Error> for NickForgeError {
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string(), None)
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, NickForgeError>;

/// Helper macros for common error patterns
#[macro_export]
macro_rules! config_error {
    ($msg:expr) => {
        $crate::error::NickForgeError::config($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NickForgeError::config(format!($fmt, $($arg)*))
    };
}

#[macro_export]
macro_rules! validation_error {
    ($msg:expr) => {
        $crate::error::NickForgeError::invalid_request($msg)
    };
    ($fmt:expr, $($arg:tt)*) => {
        $crate::error::NickForgeError::invalid_request(format!($fmt, $($arg)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_enough_unique_message() {
        let err = NickForgeError::not_enough_unique(2, 1, 10);
        let text = err.to_string();
        assert!(text.contains("2 unique nicknames"));
        assert!(text.contains("10 attempts"));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_macros() {
        let err = config_error!("numberMin must be <= numberMax ({} > {})", 5, 3);
        assert_eq!(
            err,
            NickForgeError::config("numberMin must be <= numberMax (5 > 3)")
        );

        let err = validation_error!("count must be >= 1");
        assert!(err.is_invalid_request());
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: NickForgeError = io.into();
        assert!(matches!(err, NickForgeError::Io { .. }));
        assert!(err.user_message().contains("missing"));
    }
}
