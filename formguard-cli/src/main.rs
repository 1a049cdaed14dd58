//! formguard CLI
//!
//! Runs the form validator against a document described in JSON.
//!
//! ## Usage
//!
//! ```bash
//! formguard check page.json
//! formguard replay page.json steps.json
//! formguard --config formguard.toml check page.json
//! ```

mod error;
mod paths;
mod script;

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use formdom::{Document, Element, EventOutcome};
use formguard::{FormValidator, ValidatorConfig};
use serde::de::DeserializeOwned;
use simplelog::{
    ColorChoice, CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

use crate::error::CliError;
use crate::script::Step;

#[derive(Parser)]
#[command(name = "formguard")]
#[command(about = "Validate an HTML form document the way the page would", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Validator config (TOML). Defaults to config.toml in the config directory.
    #[arg(short, long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Submit the form once and report every error
    Check {
        /// Document to validate
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,
    },

    /// Replay a script of blur/input/check/submit steps
    Replay {
        /// Document to validate
        #[arg(value_name = "DOCUMENT")]
        document: PathBuf,

        /// JSON array of steps
        #[arg(value_name = "SCRIPT")]
        script: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.verbose) {
        eprintln!("Warning: {}", e);
    }

    match run(cli) {
        Ok(EventOutcome::Proceed) => ExitCode::SUCCESS,
        Ok(EventOutcome::Prevented) => ExitCode::from(1),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

fn init_logging(verbose: bool) -> Result<(), CliError> {
    let term_level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )];

    let rotation_failures = paths::rotate_logs();
    if let Some(file) = paths::log_file().and_then(|path| File::create(path).ok()) {
        loggers.push(WriteLogger::new(LevelFilter::Debug, Config::default(), file));
    }

    CombinedLogger::init(loggers)?;
    for failure in rotation_failures {
        log::debug!("log rotation: {failure}");
    }
    Ok(())
}

fn run(cli: Cli) -> Result<EventOutcome, CliError> {
    let config = match cli.config.or_else(paths::default_config) {
        Some(path) => {
            log::debug!("loading config from {}", path.display());
            ValidatorConfig::load(&path)?
        }
        None => ValidatorConfig::default(),
    };

    match cli.command {
        Commands::Check { document } => check(&document, config),
        Commands::Replay { document, script } => replay(&document, &script, config),
    }
}

fn check(document: &Path, config: ValidatorConfig) -> Result<EventOutcome, CliError> {
    let mut doc = load_document(document)?;
    let validator = FormValidator::bind(&mut doc, config)?;

    let result = validator.handle_submit(&mut doc);
    for error in result.errors() {
        println!("{}: {}", error.field, error.message);
    }

    if result.is_valid() {
        println!("submission would proceed");
        Ok(EventOutcome::Proceed)
    } else {
        println!("submission prevented ({} error(s))", result.errors().len());
        Ok(EventOutcome::Prevented)
    }
}

fn replay(
    document: &Path,
    script: &Path,
    config: ValidatorConfig,
) -> Result<EventOutcome, CliError> {
    let mut doc = load_document(document)?;
    let validator = FormValidator::bind(&mut doc, config)?;
    let steps: Vec<Step> = load_json(script)?;

    let mut last = EventOutcome::Proceed;
    for (i, step) in steps.iter().enumerate() {
        last = step
            .apply(&mut doc, &validator)
            .map_err(|source| CliError::Step { step: i + 1, source })?;

        match last {
            EventOutcome::Proceed => println!("[{}] {}", i + 1, step),
            EventOutcome::Prevented => println!("[{}] {} (prevented)", i + 1, step),
        }
        for (field, message) in validator.visible_errors(&doc) {
            println!("    {}: {}", field, message);
        }
    }

    Ok(last)
}

fn load_document(path: &Path) -> Result<Document, CliError> {
    let root: Element = load_json(path)?;
    Ok(Document::new(root))
}

fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEMO_PAGE: &str = include_str!("../../demos/registration.json");
    const DEMO_STEPS: &str = include_str!("../../demos/steps.json");
    const DEMO_CONFIG: &str = include_str!("../../demos/formguard.toml");

    #[test]
    fn test_demo_page_blocks_empty_submit() {
        let root: Element = serde_json::from_str(DEMO_PAGE).unwrap();
        let mut doc = Document::new(root);
        let config = ValidatorConfig::from_toml_str(DEMO_CONFIG).unwrap();
        let validator = FormValidator::bind(&mut doc, config).unwrap();

        let result = validator.handle_submit(&mut doc);
        let failed: Vec<&str> = result.errors().iter().map(|e| e.field.as_str()).collect();
        assert_eq!(failed, ["fullName", "email", "country", "contactMethod"]);
    }

    #[test]
    fn test_demo_script_ends_in_submission() {
        let root: Element = serde_json::from_str(DEMO_PAGE).unwrap();
        let mut doc = Document::new(root);
        let validator = FormValidator::bind(&mut doc, ValidatorConfig::default()).unwrap();
        let steps: Vec<Step> = serde_json::from_str(DEMO_STEPS).unwrap();

        let outcomes: Vec<EventOutcome> = steps
            .iter()
            .map(|step| step.apply(&mut doc, &validator).unwrap())
            .collect();

        assert_eq!(outcomes[7], EventOutcome::Prevented);
        assert_eq!(outcomes.last(), Some(&EventOutcome::Proceed));
        assert!(validator.visible_errors(&doc).is_empty());
    }
}
