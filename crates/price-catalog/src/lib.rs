//! File-definition catalog for security price-data synchronisation.
//!
//! This crate is the metadata layer of the synchronisation tool. It loads a
//! JSON catalog of file definitions, each describing a CSV file of price bars
//! for one security, and resolves which files are synchronisation sources and
//! which are their destinations. It also provides [`Query`], the date filter
//! handed to the CSV row reader.
//!
//! # Overview
//!
//! - [`Connection`] opens a named resource for reading; [`FileConnection`]
//!   is the filesystem implementation.
//! - [`Schema`] reads metadata through a connection and builds a
//!   [`Catalog`], rejecting repeated identifiers.
//! - [`Catalog`] answers lookups by identifier and lists source definitions.
//! - [`Query`] selects either the last price bar or every bar after a date.
//!
//! # Example
//!
//! ```no_run
//! use price_catalog::{FileConnection, Schema, SchemaLoader};
//!
//! let conn = FileConnection::new("schema.json").expect("non-empty path");
//! let catalog = Schema::new(conn).load().expect("valid schema");
//!
//! for source in catalog.source_definitions() {
//!     let destination = catalog.destination_of(source);
//!     println!("{} -> {:?}", source.id(), destination.map(|fd| fd.path()));
//! }
//! ```

mod catalog;
mod connection;
mod error;
mod file_definition;
mod query;
mod schema;
mod settings;

pub use catalog::Catalog;
pub use connection::{Connection, FileConnection};
pub use error::{ConnectionError, SchemaError};
pub use file_definition::{CsvFormat, FileDefinition, Target};
pub use query::Query;
pub use schema::{Schema, SchemaLoader};
pub use settings::CatalogSettings;
