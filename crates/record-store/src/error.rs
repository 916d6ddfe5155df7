use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read the order file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line}: missing required field '{field}'")]
    MissingField { line: u64, field: &'static str },

    #[error("Line {line}: invalid value '{value}' for field '{field}'")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
    },

    #[error("Line {line}: duplicate order id '{order_id}'")]
    DuplicateOrderId { line: u64, order_id: String },
}
