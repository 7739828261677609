use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, StrideError>;

#[derive(Debug, ThisError)]
#[non_exhaustive]
pub enum StrideError {
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    #[error("workout type {code} expects {expected} values, got {actual}")]
    ArityMismatch {
        code: String,
        expected: usize,
        actual: usize,
    },

    #[error("{field} must be a non-negative whole number, got {value}")]
    InvalidCount { field: &'static str, value: f64 },

    #[error("invalid number: {value:?}")]
    InvalidNumber { value: String },

    #[error("malformed package: {line:?}")]
    MalformedPackage { line: String },

    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: Box<StrideError>,
    },

    #[error("invalid package json: {0}")]
    Json(#[from] serde_json::Error),
}

impl StrideError {
    pub fn at_line(self, line: usize) -> Self {
        StrideError::Line {
            line,
            source: Box::new(self),
        }
    }
}
