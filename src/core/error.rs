use std::fmt;

use thiserror::Error;

/// A single data-quality defect found in a catalog entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Issue {
    pub index: usize,
    pub slug: String,
    pub field: &'static str,
    pub reason: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "entry {} (\"{}\") {}: {}",
            self.index, self.slug, self.field, self.reason
        )
    }
}

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Catalog failed validation with {} issue(s)", .0.len())]
    Invalid(Vec<Issue>),

    #[error("Settings error: {message}")]
    Settings { message: String },
}

pub type Result<T> = std::result::Result<T, CatalogError>;

impl From<CatalogError> for std::io::Error {
    fn from(error: CatalogError) -> Self {
        match error {
            CatalogError::Io(error) => error,
            other => std::io::Error::new(std::io::ErrorKind::InvalidData, other.to_string()),
        }
    }
}
