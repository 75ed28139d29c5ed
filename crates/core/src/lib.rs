#![forbid(unsafe_code)]

pub mod lookup;
pub mod model;
pub mod navigation;

pub use lookup::{EntityKind, LookupError};
pub use navigation::{DashboardScope, Screen, ScreenKind};
