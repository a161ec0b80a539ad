//! Configuration errors

use super::GeneratorError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> GeneratorError {
    GeneratorError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
