//! Test data error types.

use crate::DataTestCase;
use scenaria_core::ValueType;
use thiserror::Error;

/// Errors that can occur while configuring or generating test data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataGenError {
    /// Declared minimum value exceeds the declared maximum value.
    #[error("Invalid range: minimum value {min} is greater than maximum value {max}")]
    InvalidRange { min: String, max: String },

    /// Declared minimum length exceeds the declared maximum length.
    #[error("Invalid length range: minimum length {min} is greater than maximum length {max}")]
    InvalidLengthRange { min: usize, max: usize },

    /// Declared format is not a usable regular expression.
    #[error("Invalid format '{pattern}': {reason}")]
    InvalidFormat { pattern: String, reason: String },

    /// A format was declared for a data type that cannot have one.
    #[error("A format cannot be declared for data type {data_type}")]
    IncompatibleFormat { data_type: ValueType },

    /// A declared property value does not fit the element's data type.
    #[error("Invalid value for {property}: {value}")]
    InvalidValue { property: String, value: String },

    /// Generation was asked for a data test case the configuration does not support.
    #[error("Data test case {case} is incompatible with data type {data_type}")]
    Incompatible {
        case: DataTestCase,
        data_type: ValueType,
    },

    /// No value outside the accepted ones was found within the allowed tries.
    #[error("Could not produce a value for {case} after {tries} tries")]
    NoInvalidValue { case: DataTestCase, tries: usize },

    /// The data test case needs a declared value that is missing.
    #[error("Data test case {case} requires a declared value")]
    MissingValue { case: DataTestCase },
}

impl DataGenError {
    /// Whether the error comes from the element's declared properties rather
    /// than from a request the classifier should have rejected.
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DataGenError::InvalidRange { .. }
                | DataGenError::InvalidLengthRange { .. }
                | DataGenError::InvalidFormat { .. }
                | DataGenError::IncompatibleFormat { .. }
                | DataGenError::InvalidValue { .. }
        )
    }
}

/// Result type for test data operations.
pub type DataGenResult<T> = Result<T, DataGenError>;
