use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayrollError {
    #[error("Invalid month (expected YYYY-MM): {0:?}")]
    InvalidMonth(String),

    #[error("Missing required field `{field}` on record {record:?}")]
    MissingField { field: &'static str, record: String },

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl PayrollError {
    pub fn missing_field(field: &'static str, record: impl Into<String>) -> Self {
        PayrollError::MissingField {
            field,
            record: record.into(),
        }
    }
}

impl From<serde_json::Error> for PayrollError {
    fn from(error: serde_json::Error) -> Self {
        log::error!("Snapshot parse error: {}", error);
        PayrollError::InvalidSnapshot(error.to_string())
    }
}
