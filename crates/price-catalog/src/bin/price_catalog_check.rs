//! Loads a price-data schema and reports what the synchroniser would see.
//!
//! The schema path comes from `CatalogSettings`. The command logs the number
//! of definitions and sources, warns about sources whose destination is not
//! defined, and exits with failure when the schema cannot be loaded.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use price_catalog::{CatalogSettings, FileConnection, Schema, SchemaLoader};
use tracing::{error, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "schema check failed");
            ExitCode::FAILURE
        }
    }
}

fn run() -> io::Result<()> {
    let settings = CatalogSettings::load()
        .map_err(|err| io::Error::other(format!("load settings: {err}")))?;
    let schema_path = utf8_schema_path(settings.schema_path())?;

    let conn = FileConnection::new(schema_path.as_str())
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;
    let catalog = Schema::new(conn).load().map_err(io::Error::other)?;

    info!(
        schema = %schema_path,
        definitions = catalog.len(),
        sources = catalog.source_definitions().len(),
        "schema loaded"
    );

    for source in catalog.unresolved_sources() {
        warn!(
            id = source.id(),
            destination = source.target().destination_id(),
            "source destination is not defined"
        );
    }

    Ok(())
}

fn utf8_schema_path(path: PathBuf) -> io::Result<Utf8PathBuf> {
    Utf8PathBuf::try_from(path).map_err(|err| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("schema path is not valid UTF-8: {}", err.as_path().display()),
        )
    })
}

#[cfg(test)]
mod tests {
    //! Covers schema path conversion.

    use super::*;

    #[test]
    fn utf8_schema_path_is_kept() {
        let path = utf8_schema_path(PathBuf::from("/srv/prices/schema.json"));

        assert_eq!(
            path.ok(),
            Some(Utf8PathBuf::from("/srv/prices/schema.json"))
        );
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_schema_path_is_invalid_input() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let path = PathBuf::from(OsStr::from_bytes(b"/srv/prices/sch\xffema.json"));

        let err = utf8_schema_path(path).err().map(|err| err.kind());

        assert_eq!(err, Some(io::ErrorKind::InvalidInput));
    }
}
