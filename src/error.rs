//! Error types for covx

use thiserror::Error;

/// Result type alias for report parsing operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing a coverage report
#[derive(Debug, Error)]
pub enum Error {
    /// Report document has no root element
    #[error("Malformed document: no root element")]
    MalformedDocument,

    /// A required attribute is missing on an element
    #[error("Missing attribute '{attribute}' on <{tag}>")]
    MissingAttribute { tag: String, attribute: String },

    /// A counter value is not a non-negative integer
    #[error("Invalid counter value '{value}' for '{attribute}'")]
    InvalidCounterValue {
        attribute: &'static str,
        value: String,
    },

    /// XML syntax error
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_document_display() {
        let err = Error::MalformedDocument;
        assert_eq!(err.to_string(), "Malformed document: no root element");
    }

    #[test]
    fn test_missing_attribute_display() {
        let err = Error::MissingAttribute {
            tag: "sourcefile".to_string(),
            attribute: "name".to_string(),
        };
        assert_eq!(err.to_string(), "Missing attribute 'name' on <sourcefile>");
    }

    #[test]
    fn test_invalid_counter_value_display() {
        let err = Error::InvalidCounterValue {
            attribute: "covered",
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid counter value 'abc' for 'covered'");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }
}
