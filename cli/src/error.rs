use phase_fill::FillError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fill(#[from] FillError),

    #[error("invalid profile: {0}")]
    Profile(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("File path does not exist: {0:?}")]
    MissingInput(PathBuf),

    #[error("invalid separator {0:?}: expected a single character")]
    InvalidSeparator(String),
}
