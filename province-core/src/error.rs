use thiserror::Error;

/// A value that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoercionError {
    #[error("`{0}` is not numeric")]
    NotNumeric(String),
}

/// Failure to build a province from an input record.
#[derive(Debug, Error)]
pub enum RecordError {
    /// The record is not valid JSON or is missing a field.
    #[error("malformed province record: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("province field `{field}` is not numeric")]
    Field {
        field: &'static str,
        #[source]
        source: CoercionError,
    },

    /// Only raised when producer validation is enabled.
    #[error("producer `{producer}` has negative {field} ({value})")]
    Negative {
        producer: String,
        field: &'static str,
        value: f64,
    },
}
