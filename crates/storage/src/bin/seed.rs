use std::fmt;
use std::path::PathBuf;

use storage::json::write_catalog_file;
use storage::seed::builtin_catalog;

#[derive(Debug, Clone)]
struct Args {
    out: PathBuf,
    force: bool,
}

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidOut { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidOut { raw } => write!(f, "invalid --out value: {raw:?}"),
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

impl Args {
    fn parse() -> Result<Self, ArgsError> {
        let mut out = std::env::var("PREP_CATALOG_OUT")
            .map_or_else(|_| PathBuf::from("catalog.json"), PathBuf::from);
        let mut force = false;

        let mut args = std::env::args().skip(1);
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--out" => {
                    let value = require_value(&mut args, "--out")?;
                    if value.trim().is_empty() {
                        return Err(ArgsError::InvalidOut { raw: value });
                    }
                    out = PathBuf::from(value);
                }
                "--force" => force = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self { out, force })
    }
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p storage --bin seed -- [options]");
    eprintln!();
    eprintln!("Writes the built-in sample catalog as JSON, ready for `app --catalog`.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --out <path>              Output file (default: catalog.json)");
    eprintln!("  --force                   Overwrite an existing file");
    eprintln!("  -h, --help                Show this help");
    eprintln!();
    eprintln!("Environment (same as flags):");
    eprintln!("  PREP_CATALOG_OUT");
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse().map_err(|e| {
        eprintln!("{e}");
        print_usage();
        e
    })?;

    if args.out.exists() && !args.force {
        let out = args.out.display();
        return Err(format!("{out} already exists (pass --force to overwrite)").into());
    }

    let catalog = builtin_catalog()?;
    let issues = catalog.validate();
    if !issues.is_empty() {
        for issue in &issues {
            eprintln!("catalog issue: {issue}");
        }
        return Err(format!("built-in catalog has {} integrity issues", issues.len()).into());
    }

    write_catalog_file(&args.out, &catalog)?;

    println!(
        "Wrote {} specialties, {} exams and {} questions to {}",
        catalog.specialties.len(),
        catalog.exams.len(),
        catalog.questions.len(),
        args.out.display()
    );

    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
