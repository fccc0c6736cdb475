//! Error types for gridworld environments.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid action {action}: expected a code in 0..{limit}")]
    InvalidAction { action: usize, limit: usize },

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}
