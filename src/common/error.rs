//! Unified error types for the Longan library.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// XML parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Invalid document structure or attribute value
    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::Xml(err.to_string())
    }
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
