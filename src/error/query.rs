//! Query errors

use super::GeneratorError;

/// Creates an invalid query error
pub fn invalid(query: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::InvalidQuery {
        query: query.into(),
        reason: reason.into(),
    }
}

/// Creates an unresolved browser error
pub fn unresolved(query: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::UnresolvedBrowser {
        query: query.into(),
        reason: reason.into(),
    }
}
