//! Pre-test-case generation errors.

use scenaria_core::{Location, RecognitionError};
use scenaria_testdata::DataGenError;
use thiserror::Error;

/// Diagnostics of a generation run.
///
/// The same type fills both the error list and the warning list of a
/// [`GenContext`](crate::GenContext).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenError {
    /// The properties of a UI element do not form a valid configuration.
    #[error("Invalid configuration of UI element {{{element}}} at {location}: {source}")]
    Configuration {
        element: String,
        source: DataGenError,
        location: Location,
    },

    /// A value was requested for a data test case its element does not support.
    #[error("Could not generate a value for UI element {{{element}}} at {location}: {source}")]
    Contract {
        element: String,
        source: DataGenError,
        location: Location,
    },

    #[error("Could not find UI element {{{variable}}} at {location}")]
    UnresolvedElement { variable: String, location: Location },

    #[error("Could not find constant [{name}] at {location}")]
    UnresolvedConstant { name: String, location: Location },

    #[error("Could not retrieve a value from {reference} at {location}. Not supported yet.")]
    UnsupportedProperty { reference: String, location: Location },

    #[error("Malformed reference '{text}' at {location}")]
    MalformedReference { text: String, location: Location },
}

impl GenError {
    /// Whether generation goes on with a best-effort value after the error.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GenError::UnresolvedElement { .. }
                | GenError::UnresolvedConstant { .. }
                | GenError::UnsupportedProperty { .. }
        )
    }

    pub fn location(&self) -> &Location {
        match self {
            GenError::Configuration { location, .. }
            | GenError::Contract { location, .. }
            | GenError::UnresolvedElement { location, .. }
            | GenError::UnresolvedConstant { location, .. }
            | GenError::UnsupportedProperty { location, .. }
            | GenError::MalformedReference { location, .. } => location,
        }
    }
}

impl From<RecognitionError> for GenError {
    fn from(err: RecognitionError) -> Self {
        match err {
            RecognitionError::Unclosed { open, location, .. } => GenError::MalformedReference {
                text: open.to_string(),
                location,
            },
            RecognitionError::EmptyReference { text, location } => GenError::MalformedReference { text, location },
            RecognitionError::MissingStepKeyword { content, location } => GenError::MalformedReference {
                text: content,
                location,
            },
        }
    }
}

/// Result type for pre-test-case generation.
pub type GenResult<T> = Result<T, GenError>;
