//! Error types and handling for the `TravelPlanner` library

use thiserror::Error;

/// Main error type for the `TravelPlanner` library
#[derive(Error, Debug)]
pub enum TravelPlannerError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// A lookup by unique key found nothing
    #[error("{entity} not found: {key}")]
    NotFound { entity: &'static str, key: String },

    /// Inconsistent network data handed over by the storage layer
    #[error("Data error: {message}")]
    Data { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// Network document (de)serialization errors
    #[error("JSON error: {source}")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}

impl TravelPlannerError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new not-found error for the given entity kind
    pub fn not_found<S: Into<String>>(entity: &'static str, key: S) -> Self {
        Self::NotFound {
            entity,
            key: key.into(),
        }
    }

    /// Create a new data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelPlannerError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            TravelPlannerError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelPlannerError::NotFound { entity, key } => {
                format!("No {} called '{key}' is known.", entity.to_lowercase())
            }
            TravelPlannerError::Data { .. } => {
                "The network data is inconsistent. Please re-export it from the database."
                    .to_string()
            }
            TravelPlannerError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            TravelPlannerError::Json { .. } => {
                "The network file could not be read. Please check its format.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = TravelPlannerError::config("bad horizon");
        assert!(matches!(config_err, TravelPlannerError::Config { .. }));

        let validation_err = TravelPlannerError::validation("missing region");
        assert!(matches!(validation_err, TravelPlannerError::Validation { .. }));

        let not_found = TravelPlannerError::not_found("City", "Omaha, Nebraska");
        assert!(matches!(
            not_found,
            TravelPlannerError::NotFound { entity: "City", .. }
        ));
    }

    #[test]
    fn test_user_messages() {
        let config_err = TravelPlannerError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let validation_err = TravelPlannerError::validation("test input");
        assert!(validation_err.user_message().contains("test input"));

        let not_found = TravelPlannerError::not_found("City", "Omaha, Nebraska");
        assert_eq!(
            not_found.user_message(),
            "No city called 'Omaha, Nebraska' is known."
        );
        assert_eq!(not_found.to_string(), "City not found: Omaha, Nebraska");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let planner_err: TravelPlannerError = io_err.into();
        assert!(matches!(planner_err, TravelPlannerError::Io { .. }));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let planner_err: TravelPlannerError = json_err.into();
        assert!(matches!(planner_err, TravelPlannerError::Json { .. }));
    }
}
