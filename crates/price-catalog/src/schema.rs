//! Schema loading: metadata JSON to [`Catalog`].
//!
//! The loader reads the whole metadata resource through a [`Connection`],
//! deserializes it as an array of file-definition records, and inserts them
//! into a catalog that is only returned when every record was accepted. The
//! connection is closed on every exit path.
//!
//! # Metadata format
//!
//! ```json
//! [
//!   {
//!     "Id": "1",
//!     "Kind": "Index",
//!     "TimeFrame": "30min",
//!     "Symbol": "TA35",
//!     "Name": "TA35-30min",
//!     "Description": "TA35 Index, intraday",
//!     "Path": "e:/wl/tase/ta35_30.xls",
//!     "Target": { "Src": true, "Dest": "100" },
//!     "Format": {
//!       "Delimiter": "comma",
//!       "Header": 2,
//!       "Columns": 7,
//!       "Date": "dd/mm/yyyy",
//!       "Time": "hh:mm",
//!       "DecimalCount": 2
//!     }
//!   }
//! ]
//! ```
//!
//! `Dest` and `Time` may be omitted or `null` and then default to an empty
//! string. A top-level `null` is an empty catalog. Unknown keys are ignored;
//! known keys must use the exact casing shown.

use std::io::Read;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::catalog::Catalog;
use crate::connection::Connection;
use crate::error::SchemaError;
use crate::file_definition::{CsvFormat, FileDefinition, Target};

/// Loads a [`Catalog`] from some metadata store.
pub trait SchemaLoader {
    /// Reads the metadata and builds a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if the metadata cannot be read, is malformed,
    /// or repeats an identifier.
    fn load(&mut self) -> Result<Catalog, SchemaError>;
}

/// JSON schema loader over a [`Connection`].
///
/// # Example
///
/// ```
/// use price_catalog::{Connection, FileConnection, Schema};
///
/// let conn = FileConnection::new("schema.json").expect("non-empty path");
/// let schema = Schema::new(conn);
///
/// assert_eq!(schema.connection().connection_string(), "schema.json");
/// ```
#[derive(Debug)]
pub struct Schema<C> {
    connection: C,
}

impl<C: Connection> Schema<C> {
    /// Creates a loader owning `connection`.
    pub const fn new(connection: C) -> Self {
        Self { connection }
    }

    /// Returns the owned connection.
    pub const fn connection(&self) -> &C {
        &self.connection
    }

    /// Consumes the loader and returns its connection.
    pub fn into_connection(self) -> C {
        self.connection
    }
}

impl<C: Connection> SchemaLoader for Schema<C> {
    fn load(&mut self) -> Result<Catalog, SchemaError> {
        let contents = read_all(&mut self.connection)?;

        let records: Option<Vec<RawFileDefinition>> =
            serde_json::from_slice(&contents).map_err(|e| SchemaError::FormatError {
                message: e.to_string(),
            })?;

        let catalog = build_catalog(records.unwrap_or_default())?;
        debug!(
            connection = self.connection.connection_string(),
            definitions = catalog.len(),
            sources = catalog.source_definitions().len(),
            "schema loaded"
        );
        Ok(catalog)
    }
}

/// Closes the wrapped connection when dropped.
struct CloseOnDrop<'a, C: Connection> {
    connection: &'a mut C,
}

impl<C: Connection> Drop for CloseOnDrop<'_, C> {
    fn drop(&mut self) {
        if let Err(err) = self.connection.close() {
            warn!(
                connection = self.connection.connection_string(),
                error = %err,
                "failed to close schema connection"
            );
        }
    }
}

fn read_all<C: Connection>(connection: &mut C) -> Result<Vec<u8>, SchemaError> {
    let connection_string = connection.connection_string().to_owned();
    let mut guard = CloseOnDrop { connection };

    let reader = guard.connection.open().map_err(|err| SchemaError::IoError {
        connection: connection_string.clone(),
        message: err.to_string(),
    })?;

    let mut contents = Vec::new();
    reader
        .read_to_end(&mut contents)
        .map_err(|err| SchemaError::IoError {
            connection: connection_string,
            message: err.to_string(),
        })?;

    Ok(contents)
}

fn build_catalog(records: Vec<RawFileDefinition>) -> Result<Catalog, SchemaError> {
    let mut catalog = Catalog::default();
    for record in records {
        let id = record.id.clone();
        if !catalog.insert(record.into()) {
            return Err(SchemaError::DuplicateIdentifier { id });
        }
    }
    Ok(catalog)
}

/// Raw JSON representation of a file definition.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFileDefinition {
    id: String,
    kind: String,
    time_frame: String,
    symbol: String,
    name: String,
    description: String,
    path: String,
    target: RawTarget,
    format: RawFormat,
}

/// Raw JSON representation of a target.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawTarget {
    src: bool,
    #[serde(default)]
    dest: Option<String>,
}

/// Raw JSON representation of a CSV format.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawFormat {
    delimiter: String,
    header: usize,
    columns: usize,
    date: String,
    #[serde(default)]
    time: Option<String>,
    decimal_count: usize,
}

impl From<RawFileDefinition> for FileDefinition {
    fn from(raw: RawFileDefinition) -> Self {
        Self {
            id: raw.id,
            kind: raw.kind,
            time_frame: raw.time_frame,
            symbol: raw.symbol,
            name: raw.name,
            description: raw.description,
            path: raw.path,
            target: Target {
                is_source: raw.target.src,
                destination_id: raw.target.dest.unwrap_or_default(),
            },
            format: CsvFormat {
                delimiter: raw.format.delimiter,
                header_rows: raw.format.header,
                columns: raw.format.columns,
                date_format: raw.format.date,
                time_format: raw.format.time.unwrap_or_default(),
                decimal_digits: raw.format.decimal_count,
            },
        }
    }
}
