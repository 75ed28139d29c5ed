#![forbid(unsafe_code)]

pub mod app_services;
pub mod attempt_service;
pub mod catalog_service;
pub mod error;
pub mod navigation;
pub mod results_service;

pub use app_services::AppServices;
pub use attempt_service::{AttemptService, ExamSitting, StepOutcome, TopicQuiz};
pub use catalog_service::{CatalogService, CatalogView, ResolvedScope};
pub use error::{AttemptServiceError, CatalogServiceError};
pub use navigation::{LevelChoice, NavigationService, ResolvedScreen, resolve_screen};
pub use results_service::{DEFAULT_RESULTS_CAPACITY, QUIZ_RESULTS_EXAM, ResultsService};
