use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LibraryError {
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Output error: {0}")]
    Output(String),
}

impl LibraryError {
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        LibraryError::TypeMismatch { expected, found }
    }
}

pub type Result<T> = std::result::Result<T, LibraryError>;
