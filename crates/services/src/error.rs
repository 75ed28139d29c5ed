//! Shared error types for the services crate.

use thiserror::Error;

use prep_core::LookupError;
use prep_core::model::AttemptError;
use storage::repository::StorageError;

/// Errors emitted by `CatalogService` and `NavigationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error(transparent)]
    Lookup(#[from] LookupError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl CatalogServiceError {
    /// True when the failure is an unresolved slug or id rather than a provider fault.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogServiceError::Lookup(_))
    }
}

/// Errors emitted by `AttemptService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AttemptServiceError {
    #[error("no questions are bound to this {0}")]
    Empty(&'static str),
    #[error(transparent)]
    Attempt(AttemptError),
    #[error(transparent)]
    Catalog(#[from] CatalogServiceError),
}

impl AttemptServiceError {
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, AttemptServiceError::Catalog(err) if err.is_not_found())
    }
}
