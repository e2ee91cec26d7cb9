//! Read connections to named resources.
//!
//! A [`Connection`] binds a connection string at construction and opens the
//! resource lazily. Opening is idempotent and closing a connection that was
//! never opened is a no-op, so a loader can open defensively and schedule a
//! close on every exit path.

use std::io::Read;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::File};

use crate::error::ConnectionError;

/// Capability to open a named resource for reading.
pub trait Connection {
    /// Readable handle returned by [`Connection::open`].
    type Reader: Read;

    /// Returns the bound connection string.
    fn connection_string(&self) -> &str;

    /// Returns `true` once [`Connection::open`] has succeeded and the
    /// connection has not been closed since.
    fn is_open(&self) -> bool;

    /// Opens the resource, or returns the cached handle when already open.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::IoError`] if the resource cannot be opened.
    fn open(&mut self) -> Result<&mut Self::Reader, ConnectionError>;

    /// Releases the resource. Safe to call repeatedly and before opening.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::IoError`] if releasing the resource fails.
    fn close(&mut self) -> Result<(), ConnectionError>;
}

/// Read connection to a file on the local filesystem.
///
/// The connection string is the file path. It is opened with ambient
/// authority, so relative paths resolve against the working directory and
/// symbolic links are followed wherever they point.
///
/// # Example
///
/// ```
/// use price_catalog::{Connection, FileConnection};
///
/// let conn = FileConnection::new("/data/prices/schema.json").expect("non-empty path");
///
/// assert_eq!(conn.connection_string(), "/data/prices/schema.json");
/// assert!(!conn.is_open());
/// ```
#[derive(Debug)]
pub struct FileConnection {
    connection_string: String,
    file: Option<File>,
}

impl FileConnection {
    /// Creates an unopened connection bound to `connection`.
    ///
    /// # Errors
    ///
    /// Returns [`ConnectionError::InvalidArgument`] if the string is empty.
    pub fn new(connection: impl Into<String>) -> Result<Self, ConnectionError> {
        let connection_string = connection.into();
        if connection_string.is_empty() {
            return Err(ConnectionError::InvalidArgument);
        }

        Ok(Self {
            connection_string,
            file: None,
        })
    }

    fn io_error(&self, message: impl Into<String>) -> ConnectionError {
        ConnectionError::IoError {
            connection: self.connection_string.clone(),
            message: message.into(),
        }
    }

    fn open_file(&self) -> Result<File, ConnectionError> {
        let path = Utf8Path::new(&self.connection_string);
        if path.file_name().is_none() {
            return Err(self.io_error("connection string must name a file"));
        }

        File::open_ambient(path, ambient_authority())
            .map_err(|err| self.io_error(err.to_string()))
    }
}

impl Connection for FileConnection {
    type Reader = File;

    fn connection_string(&self) -> &str {
        &self.connection_string
    }

    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn open(&mut self) -> Result<&mut File, ConnectionError> {
        let file = match self.file.take() {
            Some(file) => file,
            None => self.open_file()?,
        };
        Ok(self.file.insert(file))
    }

    fn close(&mut self) -> Result<(), ConnectionError> {
        // Dropping the handle closes the descriptor.
        drop(self.file.take());
        Ok(())
    }
}
