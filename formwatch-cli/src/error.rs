use std::path::PathBuf;

use formwatch_lib::error::{ConfigError, EventParseError, PageError};

/// Why a script line could not be applied.
#[derive(Debug, thiserror::Error)]
pub enum LineErrorKind {
    #[error(transparent)]
    Parse(#[from] EventParseError),

    #[error(transparent)]
    Page(#[from] PageError),
}

/// A script line that failed, with its 1-based line number.
#[derive(Debug, thiserror::Error)]
#[error("line {line}: {kind}")]
pub struct LineError {
    pub line: usize,
    #[source]
    pub kind: LineErrorKind,
}

/// Fatal errors that stop the run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Failed to read script '{path}': {source}")]
    Script {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Line(#[from] LineError),
}
