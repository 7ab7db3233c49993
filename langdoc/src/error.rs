//! All error types for the langdoc crate.
//!
//! These are returned from all fallible operations (parsing, joining,
//! document packing, statistics scanning, etc.).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("XML parse error: {0}")]
    XmlParse(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document error: {0}")]
    Document(String),
}

impl Error {
    /// Creates a new malformed-input error
    pub fn malformed_input(message: impl Into<String>) -> Self {
        Error::MalformedInput(message.into())
    }

    /// Creates a new document error
    pub fn document_error(message: impl Into<String>) -> Self {
        Error::Document(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_invalid_argument_error() {
        let error = Error::InvalidArgument("no action specified".to_string());
        assert_eq!(error.to_string(), "invalid argument: no action specified");
    }

    #[test]
    fn test_parse_error() {
        let json_error = serde_json::from_str::<serde_json::Value>("{ invalid json }").unwrap_err();
        let error = Error::Parse(json_error);
        assert!(error.to_string().contains("parse error"));
    }

    #[test]
    fn test_io_error() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = Error::Io(io_error);
        assert!(error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_malformed_input_error() {
        let error = Error::malformed_input("value for key `a` is not a string");
        assert_eq!(
            error.to_string(),
            "malformed input: value for key `a` is not a string"
        );
    }

    #[test]
    fn test_conflict_error() {
        let error = Error::Conflict("output file already exists".to_string());
        assert_eq!(error.to_string(), "conflict: output file already exists");
    }

    #[test]
    fn test_document_error() {
        let error = Error::document_error("failed to pack document");
        assert_eq!(error.to_string(), "document error: failed to pack document");
    }

    #[test]
    fn test_error_display() {
        let errors = vec![
            Error::InvalidArgument("test".to_string()),
            Error::NotFound("test".to_string()),
            Error::Conflict("test".to_string()),
            Error::MalformedInput("test".to_string()),
            Error::Document("test".to_string()),
        ];

        for error in errors {
            let display = format!("{}", error);
            assert!(!display.is_empty());
            assert!(display.contains("test"));
        }
    }

    #[test]
    fn test_error_debug() {
        let error = Error::NotFound("test".to_string());
        let debug = format!("{:?}", error);
        assert!(debug.contains("NotFound"));
        assert!(debug.contains("test"));
    }
}
