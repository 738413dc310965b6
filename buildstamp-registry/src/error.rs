//! Error types for buildstamp-registry.
//!
//! Reading the record never fails. Errors only come from the start-up path:
//! - writes that arrive after the record was published
//! - stamp values that are missing or malformed

use buildstamp_types::Field;
use std::num::ParseIntError;
use thiserror::Error;

/// A write was rejected by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The record has already been read; it is immutable from then on.
    #[error("build record already published; refusing to set {field}")]
    Sealed { field: Field },
}

/// A stamp could not be assembled from its variables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StampError {
    #[error("missing stamp variable {key}")]
    Missing { key: &'static str },

    #[error("invalid stamp timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure of the start-up initializer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StartupError {
    #[error(transparent)]
    Stamp(#[from] StampError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sealed_display_names_field() {
        let err = RegistryError::Sealed {
            field: Field::Revision,
        };
        assert_eq!(
            err.to_string(),
            "build record already published; refusing to set revision"
        );
    }

    #[test]
    fn startup_error_is_transparent() {
        let err = StartupError::from(StampError::Missing {
            key: "BUILD_HOST",
        });
        assert_eq!(err.to_string(), "missing stamp variable BUILD_HOST");
    }
}
