use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("line {line_no}: malformed header line {line:?}: {reason}")]
    MalformedHeaderLine {
        line_no: usize,
        line: String,
        reason: String,
    },
    #[error("line {line_no}: expected {expected:?} in {line:?}")]
    MalformedDataLine {
        line_no: usize,
        line: String,
        expected: &'static str,
    },
    #[error("failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid settings: {0}")]
    Settings(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, ExtractError>;
