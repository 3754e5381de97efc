use thiserror::Error;

use crate::validation::{ MAX_LENGTH, MIN_LENGTH };

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LengthError {
    #[error("This field is required!")]
    Required,

    #[error("Number is required")]
    NotANumber,

    #[error("Must be between {} and {}", MIN_LENGTH, MAX_LENGTH)]
    OutOfRange,
}

/// Why the submit action is closed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("{0}")]
    Length(#[from] LengthError),

    #[error("Select at least one character class")]
    NoClassSelected,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Character pool is empty: no character class selected")]
    EmptyPool,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Generate is disabled: {0}")]
    SubmitDisabled(#[from] SubmitBlocked),

    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error("No password has been generated yet")]
    NothingToCopy,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error(transparent)]
    Form(#[from] FormError),
}

impl AppError {
    /// 2 for rejected input, 1 for everything else.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Form(FormError::SubmitDisabled(_)) => 2,
            _ => 1,
        }
    }
}
