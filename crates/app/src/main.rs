use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use prep_core::Screen;
use prep_core::navigation::validate_route_table;
use services::{AppServices, AttemptService, CatalogService, NavigationService, ResultsService};
use storage::repository::Storage;
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidCatalogPath { raw: String },
    InvalidRoute { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidCatalogPath { raw } => write!(f, "invalid --catalog value: {raw}"),
            ArgsError::InvalidRoute { raw } => {
                write!(f, "invalid --route value: {raw} (not a known screen path)")
            }
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

struct DesktopApp {
    start_route: Option<String>,
    services: AppServices,
}

impl UiApp for DesktopApp {
    fn start_route(&self) -> Option<String> {
        self.start_route.clone()
    }

    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn navigation(&self) -> Arc<NavigationService> {
        self.services.navigation()
    }

    fn attempts(&self) -> Arc<AttemptService> {
        self.services.attempts()
    }

    fn results(&self) -> Arc<ResultsService> {
        self.services.results()
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--catalog <path.json>] [--route <path>]");
    eprintln!("  cargo run -p app -- --check [--catalog <path.json>]");
    eprintln!();
    eprintln!("Defaults:");
    eprintln!("  built-in sample catalog, start at /");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PREP_CATALOG, PREP_START_ROUTE, RUST_LOG");
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Ui,
    Check,
}

#[derive(Debug)]
struct Args {
    command: Command,
    catalog: Option<PathBuf>,
    start_route: Option<String>,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Option<Self>, ArgsError> {
        let mut command = Command::Ui;
        let mut catalog = std::env::var("PREP_CATALOG")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);
        let mut start_route = std::env::var("PREP_START_ROUTE")
            .ok()
            .filter(|value| !value.trim().is_empty());

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => {
                    let value = require_value(args, "--catalog")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidCatalogPath { raw: value });
                    }
                    catalog = Some(PathBuf::from(value));
                }
                "--route" => start_route = Some(require_value(args, "--route")?),
                "--check" => command = Command::Check,
                "--help" | "-h" => return Ok(None),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        if let Some(route) = &start_route {
            if Screen::parse(route).is_none() {
                return Err(ArgsError::InvalidRoute { raw: route.clone() });
            }
        }

        Ok(Some(Self {
            command,
            catalog,
            start_route,
        }))
    }
}

fn open_storage(catalog: Option<&PathBuf>) -> Result<Storage, Box<dyn std::error::Error>> {
    match catalog {
        Some(path) => {
            log::info!("loading catalog from {}", path.display());
            Ok(Storage::from_json_file(path)?)
        }
        None => {
            log::info!("using the built-in catalog");
            Ok(Storage::in_memory()?)
        }
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let parsed = match Args::parse(&mut argv) {
        Ok(Some(parsed)) => parsed,
        Ok(None) => {
            print_usage();
            return Ok(());
        }
        Err(err) => {
            eprintln!("{err}");
            print_usage();
            return Err(err.into());
        }
    };

    // Route dispatch is fixed at compile time; a bad table is a startup error.
    validate_route_table()?;

    let storage = open_storage(parsed.catalog.as_ref())?;
    let services = AppServices::new(&storage);
    let issues = services.check().await?;

    match parsed.command {
        Command::Check => {
            for issue in &issues {
                println!("{issue}");
            }
            if issues.is_empty() {
                println!("route table and catalog are consistent");
                Ok(())
            } else {
                Err(format!("{} catalog issue(s) found", issues.len()).into())
            }
        }
        Command::Ui => {
            let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
                start_route: parsed.start_route,
                services,
            });
            let context = build_app_context(&app);

            // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
            let desktop_cfg = DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title("Exam Prep")
                    .with_always_on_top(false),
            );

            LaunchBuilder::desktop()
                .with_cfg(desktop_cfg)
                .with_context(context)
                .launch(App);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() {
    pretty_env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
