use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Invalid dashboard settings: {0}")]
    InvalidSettings(String),
}
