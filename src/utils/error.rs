use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl AppError {
    /// Short message suitable for showing to an end user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            AppError::ApiError(_) => "Could not reach the server. Please try again.".to_string(),
            AppError::HttpStatus { status } if *status >= 500 => {
                "The server ran into a problem. Please try again later.".to_string()
            }
            AppError::HttpStatus { status } => format!("The request was rejected ({}).", status),
            AppError::IoError(e) => format!("File access failed: {}", e),
            AppError::SerializationError(_) => "Received an unreadable response.".to_string(),
            AppError::ConfigError { message } => format!("Configuration problem: {}", message),
            AppError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            AppError::ValidationError { message } => message.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_messages() {
        let err = AppError::HttpStatus { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.user_friendly_message(), "The request was rejected (404).");

        let err = AppError::HttpStatus { status: 503 };
        assert!(err.user_friendly_message().contains("try again later"));
    }

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::ValidationError {
            message: "Cart is empty".to_string(),
        };
        assert_eq!(err.user_friendly_message(), "Cart is empty");
    }
}
