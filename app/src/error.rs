use std::path::PathBuf;

use library::LibraryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
    #[error("Invalid script manifest: {0}")]
    Manifest(String),
    #[error(transparent)]
    Library(#[from] LibraryError),
    #[error("Script path required.")]
    MissingScriptPath,
    #[error("Script path is invalid.")]
    ScriptPath(PathBuf),
}

pub type AppResult<T> = Result<T, AppError>;
