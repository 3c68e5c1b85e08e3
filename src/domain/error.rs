use std::io;

use thiserror::Error;

/// Library-wide error type for ztp operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure (asset bundles, configuration files).
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No template is stored under the identifier.
    #[error("template {0} not found")]
    NotFound(String),

    /// A template is already stored under the identifier.
    #[error("template {0} already exists")]
    AlreadyExists(String),

    /// Template identifier is invalid.
    #[error(
        "Invalid template identifier '{0}': must be lowercase alphanumeric with underscores or hyphens"
    )]
    InvalidTemplateId(String),

    /// Input could not be decoded (parameters, generated description, cloud-config).
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// Template evaluation failed (syntax error, undefined reference).
    #[error("Failed to render template {template}: {details}")]
    RenderError { template: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn parse_error(what: impl Into<String>, details: impl ToString) -> Self {
        AppError::ParseError { what: what.into(), details: details.to_string() }
    }

    pub fn render_error(template: impl Into<String>, details: impl ToString) -> Self {
        AppError::RenderError { template: template.into(), details: details.to_string() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors onto exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::NotFound(_) => io::ErrorKind::NotFound,
            AppError::AlreadyExists(_) => io::ErrorKind::AlreadyExists,
            AppError::Configuration(_)
            | AppError::InvalidTemplateId(_)
            | AppError::ParseError { .. } => io::ErrorKind::InvalidInput,
            AppError::RenderError { .. } => io::ErrorKind::InvalidData,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_template() {
        let err = AppError::NotFound("web".to_string());
        assert_eq!(err.to_string(), "template web not found");
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn already_exists_message_names_template() {
        let err = AppError::AlreadyExists("duplicate_template".to_string());
        assert_eq!(err.to_string(), "template duplicate_template already exists");
        assert_eq!(err.kind(), io::ErrorKind::AlreadyExists);
    }

    #[test]
    fn parse_error_carries_cause() {
        let err = AppError::parse_error("parameters", "expected value at line 1 column 2");
        assert!(err.to_string().contains("parameters"));
        assert!(err.to_string().contains("line 1 column 2"));
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }
}
