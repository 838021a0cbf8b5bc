//! Shared error types.

/// Validation failures on individual values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was absent or empty
    #[error("Missing required field: {field_name}")]
    MissingRequiredField {
        /// The field that was absent
        field_name: String,
    },
    /// A field carried a value outside its allowed shape
    #[error("Incorrect value provided for field: {field_name}")]
    IncorrectValueProvided {
        /// The offending field
        field_name: &'static str,
    },
    /// Free-form invalid value report
    #[error("Invalid value provided: {message}")]
    InvalidValue {
        /// What was wrong with the value
        message: String,
    },
}
