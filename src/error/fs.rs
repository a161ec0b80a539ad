//! File system and formatting errors

use super::GeneratorError;

/// Creates a write failed error
pub fn write_failed(path: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::FileWriteFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an outdated output error
pub fn outdated(path: impl Into<String>) -> GeneratorError {
    GeneratorError::OutputOutdated { path: path.into() }
}

/// Creates a format failed error
pub fn format_failed(path: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::FormatFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates an unsupported format target error
pub fn unsupported_target(path: impl Into<String>) -> GeneratorError {
    GeneratorError::UnsupportedTarget { path: path.into() }
}
