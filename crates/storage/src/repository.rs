use async_trait::async_trait;
use prep_core::model::Catalog;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::json;
use crate::seed;

/// Errors surfaced by catalog providers.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("io error: {0}")]
    Io(String),
}

/// Read-only access to the static content catalog.
///
/// Providers hand out a shared snapshot; callers never mutate it.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Fetch the catalog snapshot.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the provider cannot produce a catalog.
    async fn load_catalog(&self) -> Result<Arc<Catalog>, StorageError>;
}

/// Catalog held in memory for the lifetime of the process.
#[derive(Clone, Debug, Default)]
pub struct InMemoryCatalog {
    catalog: Arc<Catalog>,
}

impl InMemoryCatalog {
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
        }
    }

    /// Catalog populated with the built-in sample content.
    ///
    /// # Errors
    ///
    /// See [`seed::builtin_catalog`].
    pub fn builtin() -> Result<Self, StorageError> {
        seed::builtin_catalog().map(Self::new)
    }

    /// Load a catalog from a JSON document on disk.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Io` if the file cannot be read, or
    /// `StorageError::Serialization` if it is not a valid catalog.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        json::read_catalog_file(path).map(Self::new)
    }
}

#[async_trait]
impl CatalogRepository for InMemoryCatalog {
    async fn load_catalog(&self) -> Result<Arc<Catalog>, StorageError> {
        Ok(Arc::clone(&self.catalog))
    }
}

/// Catalog provider behind a trait object for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub catalog: Arc<dyn CatalogRepository>,
}

impl Storage {
    /// Storage over the built-in sample content.
    ///
    /// # Errors
    ///
    /// See [`seed::builtin_catalog`].
    pub fn in_memory() -> Result<Self, StorageError> {
        seed::builtin_catalog().map(Self::from_catalog)
    }

    #[must_use]
    pub fn from_catalog(catalog: Catalog) -> Self {
        let catalog: Arc<dyn CatalogRepository> = Arc::new(InMemoryCatalog::new(catalog));
        Self { catalog }
    }

    /// # Errors
    ///
    /// See [`InMemoryCatalog::from_json_file`].
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let repo = InMemoryCatalog::from_json_file(path)?;
        let catalog: Arc<dyn CatalogRepository> = Arc::new(repo);
        Ok(Self { catalog })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn in_memory_storage_serves_builtin_catalog() {
        let storage = Storage::in_memory().unwrap();
        let catalog = storage.catalog.load_catalog().await.unwrap();
        assert_eq!(catalog.specialties.len(), 2);
        assert!(catalog.validate().is_empty());
    }

    #[tokio::test]
    async fn snapshots_are_shared_not_copied() {
        let repo = InMemoryCatalog::builtin().unwrap();
        let first = repo.load_catalog().await.unwrap();
        let second = repo.load_catalog().await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Storage::from_json_file("/definitely/not/here.json")
            .err()
            .expect("missing file should fail");
        assert!(matches!(err, StorageError::Io(_)));
    }
}
