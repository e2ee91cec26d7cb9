//! Catalog settings loaded via OrthoConfig.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_SCHEMA_FILE: &str = "schema.json";

/// Settings for locating the metadata file.
///
/// Values are layered from configuration files, `PRICE_CATALOG_*`
/// environment variables, and command-line flags.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "PRICE_CATALOG")]
pub struct CatalogSettings {
    /// Path to the metadata (schema) file.
    pub schema_path: Option<PathBuf>,
}

impl CatalogSettings {
    /// Returns the configured schema path, falling back to `schema.json` in
    /// the working directory.
    #[must_use]
    pub fn schema_path(&self) -> PathBuf {
        self.schema_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SCHEMA_FILE))
    }
}
