use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Config(#[from] formguard::ConfigError),
    #[error(transparent)]
    Bind(#[from] formguard::BindError),
    #[error("step {step}: {source}")]
    Step {
        step: usize,
        #[source]
        source: formdom::DocumentError,
    },
    #[error("failed to initialize logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
