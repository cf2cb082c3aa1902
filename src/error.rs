use std::{fmt, io};

use serde::{Deserialize, Serialize};
use serde_json::Error as JsonError;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Error)]
pub enum CoeditError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Custom error: {0}")]
    Custom(String),
    #[error("File System error: {0}")]
    Io(String),
    #[error("Item Not Found: {0}")]
    NotFound(String),
    #[error("You do not have permission to access this resource")]
    PermissionDenied,
    #[error("(De)Serialization error: {0}")]
    Serialization(String),
}

impl CoeditError {
    /// True when the error means a source could not be reached at all, as opposed to a source
    /// that was read but whose content could not be understood.
    pub fn is_unavailable(&self) -> bool {
        matches!(
            self,
            CoeditError::Io(_) | CoeditError::NotFound(_) | CoeditError::PermissionDenied
        )
    }
}

impl From<toml::de::Error> for CoeditError {
    fn from(src: toml::de::Error) -> CoeditError {
        CoeditError::Config(format!("Toml deserialization error: {src}"))
    }
}

impl From<toml::ser::Error> for CoeditError {
    fn from(src: toml::ser::Error) -> CoeditError {
        CoeditError::Serialization(format!("Toml serialization error: {src}"))
    }
}

impl From<JsonError> for CoeditError {
    fn from(src: JsonError) -> CoeditError {
        CoeditError::Serialization(format!("JSON (de)serialization error: {src}"))
    }
}

impl From<io::Error> for CoeditError {
    fn from(x: io::Error) -> Self {
        match x.kind() {
            io::ErrorKind::NotFound => CoeditError::NotFound(format!("{x}")),
            io::ErrorKind::PermissionDenied => CoeditError::PermissionDenied,
            _ => CoeditError::Io(format!("IOError: {}", x.kind())),
        }
    }
}

impl From<fmt::Error> for CoeditError {
    fn from(x: fmt::Error) -> Self {
        CoeditError::Custom(format!("{x}"))
    }
}
