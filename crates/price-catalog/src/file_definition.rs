//! File-definition value types.
//!
//! A [`FileDefinition`] describes one security's CSV price-data file. Values
//! are built by the schema loader and never mutated afterwards, so fields are
//! crate-private and exposed through getters.

/// Format parameters of a CSV price-data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvFormat {
    pub(crate) delimiter: String,
    pub(crate) header_rows: usize,
    pub(crate) columns: usize,
    pub(crate) date_format: String,
    pub(crate) time_format: String,
    pub(crate) decimal_digits: usize,
}

impl CsvFormat {
    /// Returns the delimiter token, for example `comma` or `tab`.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Returns the number of header rows.
    #[must_use]
    pub const fn header_rows(&self) -> usize {
        self.header_rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Returns the date-column pattern, for example `dd/mm/yyyy`.
    #[must_use]
    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    /// Returns the time-column pattern; empty when the file has no time
    /// column.
    #[must_use]
    pub fn time_format(&self) -> &str {
        &self.time_format
    }

    /// Returns the number of decimal digits in price fields.
    #[must_use]
    pub const fn decimal_digits(&self) -> usize {
        self.decimal_digits
    }
}

/// Synchronisation role of a file.
///
/// A source file is synchronised into the definition named by
/// [`Target::destination_id`]. For non-source files the destination is not
/// meaningful and is normally empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Target {
    pub(crate) is_source: bool,
    pub(crate) destination_id: String,
}

impl Target {
    /// Returns `true` when the file is a synchronisation source.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        self.is_source
    }

    /// Returns the identifier of the definition this source syncs into.
    #[must_use]
    pub fn destination_id(&self) -> &str {
        &self.destination_id
    }
}

/// Metadata for one security's price-data file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileDefinition {
    pub(crate) id: String,
    pub(crate) kind: String,
    pub(crate) time_frame: String,
    pub(crate) symbol: String,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) path: String,
    pub(crate) target: Target,
    pub(crate) format: CsvFormat,
}

impl FileDefinition {
    /// Returns the identifier, unique within a catalog.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns the security kind, for example `Index` or `Currency`.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the bar time frame label, for example `Daily` or `30min`.
    #[must_use]
    pub fn time_frame(&self) -> &str {
        &self.time_frame
    }

    /// Returns the security symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the free-text description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the path to the CSV data file.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the synchronisation role.
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the CSV format parameters.
    #[must_use]
    pub const fn format(&self) -> &CsvFormat {
        &self.format
    }

    /// Shorthand for `self.target().is_source()`.
    #[must_use]
    pub const fn is_source(&self) -> bool {
        self.target.is_source
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_definition_is_empty_non_source() {
        let fd = FileDefinition::default();

        assert_eq!(fd.id(), "");
        assert!(!fd.is_source());
        assert_eq!(fd.target().destination_id(), "");
        assert_eq!(fd.format().columns(), 0);
        assert_eq!(fd.format().time_format(), "");
    }

    #[test]
    fn target_getters_work() {
        let target = Target {
            is_source: true,
            destination_id: "100".to_owned(),
        };

        assert!(target.is_source());
        assert_eq!(target.destination_id(), "100");
    }

    #[test]
    fn csv_format_getters_work() {
        let format = CsvFormat {
            delimiter: "tab".to_owned(),
            header_rows: 2,
            columns: 6,
            date_format: "dd/mm/yyyy".to_owned(),
            time_format: String::new(),
            decimal_digits: 2,
        };

        assert_eq!(format.delimiter(), "tab");
        assert_eq!(format.header_rows(), 2);
        assert_eq!(format.columns(), 6);
        assert_eq!(format.date_format(), "dd/mm/yyyy");
        assert_eq!(format.time_format(), "");
        assert_eq!(format.decimal_digits(), 2);
    }
}
