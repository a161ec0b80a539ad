//! Compatibility-data lookup errors

use super::GeneratorError;

/// Creates an oracle failure error
pub fn failed(query: impl Into<String>, reason: impl Into<String>) -> GeneratorError {
    GeneratorError::OracleFailed {
        query: query.into(),
        reason: reason.into(),
    }
}
