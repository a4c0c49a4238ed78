//! ResRobot client error types.

use std::fmt;

/// Errors from the ResRobot HTTP client.
///
/// Every variant aborts the fetch cycle it occurred in; the previous board
/// snapshot stays on display and the next timer tick tries again.
#[derive(Debug)]
pub enum ResRobotError {
    /// HTTP request failed (network error, timeout, etc.)
    Http(reqwest::Error),

    /// JSON deserialization failed
    Json {
        message: String,
        body: Option<String>,
    },

    /// API returned an error status code
    Api { status: u16, message: String },

    /// Invalid or missing access id
    Unauthorized,
}

impl fmt::Display for ResRobotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResRobotError::Http(e) => write!(f, "HTTP error: {e}"),
            ResRobotError::Json { message, body } => {
                write!(f, "JSON parse error: {message}")?;
                if let Some(body) = body {
                    write!(f, " (body: {body})")?;
                }
                Ok(())
            }
            ResRobotError::Api { status, message } => {
                write!(f, "API error {status}: {message}")
            }
            ResRobotError::Unauthorized => write!(f, "unauthorized (invalid access id)"),
        }
    }
}

impl std::error::Error for ResRobotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ResRobotError::Http(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ResRobotError {
    fn from(err: reqwest::Error) -> Self {
        ResRobotError::Http(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ResRobotError::Unauthorized;
        assert_eq!(err.to_string(), "unauthorized (invalid access id)");

        let err = ResRobotError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = ResRobotError::Json {
            message: "expected string".into(),
            body: Some("{}".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected string"));
    }
}
