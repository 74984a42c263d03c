//! Session startup shared by both binaries: check the catalog, then load the table.
//!
//! Either failure halts the session before anything is drawn.

use crate::catalog::{self, CatalogError, Indicator};
use crate::models::RecordTable;
use crate::storage::{self, DatasetError};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Catálogo de indicadores inválido: {0}")]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
}

/// Validate the catalog and load the table at `path`.
pub fn open<P: AsRef<Path>>(path: P) -> Result<RecordTable, SessionError> {
    open_with(catalog::entries(), path.as_ref())
}

/// [`open`] on `trabalho.csv` in the current working directory.
pub fn open_default() -> Result<RecordTable, SessionError> {
    catalog::validate()?;
    Ok(storage::load_default()?)
}

pub(crate) fn open_with(entries: &[Indicator], path: &Path) -> Result<RecordTable, SessionError> {
    catalog::validate_entries(entries)?;
    let table = storage::load_csv(path)?;
    log::debug!("session opened with {} rows", table.len());
    Ok(table)
}
