//! Error types for the price-catalog crate.
//!
//! Connection failures and schema load failures are kept in separate enums so
//! a caller constructing a connection never has to match on load-only
//! variants. Both carry owned messages rather than boxed sources, which keeps
//! them `Clone` and comparable in tests.

use thiserror::Error;

/// Errors raised while creating, opening, or closing a [`Connection`].
///
/// [`Connection`]: crate::Connection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConnectionError {
    /// The connection string was empty.
    #[error("connection string cannot be empty")]
    InvalidArgument,

    /// The underlying resource could not be opened or released.
    #[error("failed to access '{connection}': {message}")]
    IoError {
        /// Connection string of the resource.
        connection: String,
        /// Description of the I/O failure.
        message: String,
    },
}

/// Errors that abort a schema load.
///
/// Every variant is terminal for the load in which it occurs; no partially
/// populated catalog accompanies it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    /// The metadata resource could not be opened or read.
    #[error("schema load, I/O error on '{connection}': {message}")]
    IoError {
        /// Connection string of the metadata resource.
        connection: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// The metadata is not a well-formed sequence of file definitions.
    #[error("schema load, data format error: {message}")]
    FormatError {
        /// Description of the parse failure.
        message: String,
    },

    /// Two records share the same identifier.
    #[error("schema load, duplicate file definition id [{id}]")]
    DuplicateIdentifier {
        /// The repeated identifier.
        id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_error_invalid_argument_formats_correctly() {
        let err = ConnectionError::InvalidArgument;
        assert_eq!(err.to_string(), "connection string cannot be empty");
    }

    #[test]
    fn connection_error_io_formats_correctly() {
        let err = ConnectionError::IoError {
            connection: "/data/schema.json".to_owned(),
            message: "file not found".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "failed to access '/data/schema.json': file not found"
        );
    }

    #[test]
    fn schema_error_io_formats_correctly() {
        let err = SchemaError::IoError {
            connection: "schema.json".to_owned(),
            message: "permission denied".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "schema load, I/O error on 'schema.json': permission denied"
        );
    }

    #[test]
    fn schema_error_format_formats_correctly() {
        let err = SchemaError::FormatError {
            message: "expected `,` at line 1 column 20".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "schema load, data format error: expected `,` at line 1 column 20"
        );
    }

    #[test]
    fn schema_error_duplicate_formats_correctly() {
        let err = SchemaError::DuplicateIdentifier { id: "1".to_owned() };
        assert_eq!(
            err.to_string(),
            "schema load, duplicate file definition id [1]"
        );
    }
}
