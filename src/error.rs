use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("invalid {field}: {value:?} is not an integer")]
    InvalidInteger { field: &'static str, value: String },
    #[error("invalid {field}: {value:?} is not a YYYY-MM-DD date")]
    InvalidDate {
        field: &'static str,
        value: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("{group_by} group {group} overflowed while summing")]
    AggregateOverflow { group_by: &'static str, group: String },
}

impl QueryError {
    /// True when the error was caused by the caller's request rather than the data source.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            QueryError::InvalidInteger { .. } | QueryError::InvalidDate { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
