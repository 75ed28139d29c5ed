use std::sync::{Arc, Mutex, PoisonError};

use services::{AttemptService, CatalogService, NavigationService, ResultsService};

pub trait UiApp: Send + Sync {
    /// Path to open instead of `/` on the first render, if any.
    fn start_route(&self) -> Option<String>;

    fn catalog(&self) -> Arc<CatalogService>;
    fn navigation(&self) -> Arc<NavigationService>;
    fn attempts(&self) -> Arc<AttemptService>;
    fn results(&self) -> Arc<ResultsService>;
}

#[derive(Clone)]
pub struct AppContext {
    start_route_configured: Option<String>,
    start_route_once: Arc<Mutex<Option<String>>>,

    catalog: Arc<CatalogService>,
    navigation: Arc<NavigationService>,
    attempts: Arc<AttemptService>,
    results: Arc<ResultsService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        let start_route_configured = app.start_route();

        Self {
            start_route_once: Arc::new(Mutex::new(start_route_configured.clone())),
            start_route_configured,
            catalog: app.catalog(),
            navigation: app.navigation(),
            attempts: app.attempts(),
            results: app.results(),
        }
    }

    /// The start route, handed out once per app run.
    #[must_use]
    pub fn take_start_route(&self) -> Option<String> {
        self.start_route_once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// The configured value (not the one-shot value). Useful for diagnostics/UI.
    #[must_use]
    pub fn start_route_configured(&self) -> Option<&str> {
        self.start_route_configured.as_deref()
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

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
