use thiserror::Error;

/// Failures while locating, parsing or validating settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Invalid configuration: {0}")]
    ParseError(String),

    /// `field` is the dotted settings path, e.g. `jwt.secret`
    #[error("Invalid value for {field}: {message}")]
    ValidationError { field: String, message: String },

    #[error("Invalid environment: {0}")]
    EnvVarError(String),

    #[error("Conflicting configuration sources: {0}")]
    MutualExclusivityError(String),

    #[error(transparent)]
    Other(#[from] config::ConfigError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        ConfigError::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn file_not_found(path: impl Into<String>) -> Self {
        ConfigError::FileNotFound(path.into())
    }

    pub fn mutual_exclusivity(message: impl Into<String>) -> Self {
        ConfigError::MutualExclusivityError(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_names_the_field() {
        let err = ConfigError::validation("application.timezone", "Unknown time zone 'Mars/Base'");
        assert_eq!(
            err.to_string(),
            "Invalid value for application.timezone: Unknown time zone 'Mars/Base'"
        );
    }
}
