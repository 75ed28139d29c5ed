//! JSON catalog documents.
//!
//! The document is the serde form of `Catalog`: one array per collection, with
//! question sets binding question ids to a topic or an exam.

use std::fs;
use std::path::Path;

use prep_core::model::Catalog;

use crate::repository::StorageError;

/// Parse a catalog document.
///
/// # Errors
///
/// Returns `StorageError::Serialization` on malformed JSON, invalid slugs, or
/// questions whose correct index is out of range.
pub fn parse_catalog(input: &str) -> Result<Catalog, StorageError> {
    serde_json::from_str(input).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// # Errors
///
/// Returns `StorageError::Serialization` if the catalog cannot be encoded.
pub fn catalog_to_string(catalog: &Catalog) -> Result<String, StorageError> {
    serde_json::to_string_pretty(catalog).map_err(|e| StorageError::Serialization(e.to_string()))
}

/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be read, otherwise see [`parse_catalog`].
pub fn read_catalog_file(path: impl AsRef<Path>) -> Result<Catalog, StorageError> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .map_err(|e| StorageError::Io(format!("{}: {e}", path.display())))?;
    let catalog = parse_catalog(&raw)?;
    log::info!(
        "loaded catalog from {} ({} specialties, {} questions)",
        path.display(),
        catalog.specialties.len(),
        catalog.questions.len()
    );
    Ok(catalog)
}

/// # Errors
///
/// Returns `StorageError::Io` if the file cannot be written.
pub fn write_catalog_file(path: impl AsRef<Path>, catalog: &Catalog) -> Result<(), StorageError> {
    let path = path.as_ref();
    let body = catalog_to_string(catalog)?;
    fs::write(path, body).map_err(|e| StorageError::Io(format!("{}: {e}", path.display())))
}
