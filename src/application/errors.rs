use crate::domain::{ConstraintViolation, FieldKind};
use std::path::PathBuf;
use thiserror::Error;

/// Failures outside the BMI arithmetic itself.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("cannot open log file {path}: {source}")]
    LogFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("failed to encode result: {0}")]
    Json(#[from] serde_json::Error),
    #[error("{}: {violation}", field.name())]
    Rejected {
        field: FieldKind,
        violation: ConstraintViolation,
    },
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_message_names_field() {
        let err = AppError::Rejected {
            field: FieldKind::Height,
            violation: ConstraintViolation::ValueMissing,
        };
        assert_eq!(err.to_string(), "height: Please fill out this field.");
    }

    #[test]
    fn test_log_file_message_includes_path() {
        let err = AppError::LogFile {
            path: PathBuf::from("/nope/bmi.log"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "cannot open log file /nope/bmi.log: missing");
    }
}
