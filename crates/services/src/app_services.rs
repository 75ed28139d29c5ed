use std::sync::Arc;

use prep_core::model::IntegrityIssue;
use storage::repository::{Storage, StorageError};

use crate::attempt_service::AttemptService;
use crate::catalog_service::CatalogService;
use crate::error::CatalogServiceError;
use crate::navigation::NavigationService;
use crate::results_service::ResultsService;

/// Assembles app-facing services over one catalog provider.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<CatalogService>,
    navigation: Arc<NavigationService>,
    attempts: Arc<AttemptService>,
    results: Arc<ResultsService>,
}

impl AppServices {
    #[must_use]
    pub fn new(storage: &Storage) -> Self {
        let catalog = Arc::new(CatalogService::new(Arc::clone(&storage.catalog)));
        let results = Arc::new(ResultsService::new());
        let navigation = Arc::new(NavigationService::new(Arc::clone(&catalog)));
        let attempts = Arc::new(AttemptService::new(
            Arc::clone(&catalog),
            Arc::clone(&results),
        ));
        Self {
            catalog,
            navigation,
            attempts,
            results,
        }
    }

    /// Services over the built-in sample catalog.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the built-in content is malformed.
    pub fn builtin() -> Result<Self, StorageError> {
        Storage::in_memory().map(|storage| Self::new(&storage))
    }

    /// Validate the catalog once, logging each finding.
    ///
    /// # Errors
    ///
    /// Returns `CatalogServiceError::Storage` if the catalog cannot be loaded.
    pub async fn check(&self) -> Result<Vec<IntegrityIssue>, CatalogServiceError> {
        let issues = self.catalog.check_integrity().await?;
        if issues.is_empty() {
            log::info!("catalog passed integrity checks");
        }
        Ok(issues)
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn navigation(&self) -> Arc<NavigationService> {
        Arc::clone(&self.navigation)
    }

    #[must_use]
    pub fn attempts(&self) -> Arc<AttemptService> {
        Arc::clone(&self.attempts)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultsService> {
        Arc::clone(&self.results)
    }
}
