//! The one error type every core operation returns.
//!
//! Validation problems come from the domain layer, failed steps of a run
//! from the application layer. Both keep their own suggestions; the CLI maps
//! [`ErrorCategory`] to an exit code.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Any failure inside `nextkit-core`.
///
/// `Clone` so a failure can sit in a [`RunReport`](crate::application::RunReport)
/// and still be returned to the caller.
#[derive(Debug, Error, Clone)]
pub enum NextkitError {
    /// Bad project name, manifest, feature name or template path.
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// A command, file operation, prompt or adapter failed during a run.
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("Internal error: {message}. This is a bug, please report it.")]
    Internal { message: String },
}

impl NextkitError {
    /// Hints printed under the error message.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Internal { .. } => vec![
                "This appears to be a bug in nextkit".into(),
                "Please report this issue at: https://github.com/cosecruz/nextkit/issues".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
            Self::Internal { .. } => ErrorCategory::Internal,
        }
    }
}

/// Who has to act: the user (`Validation`, `NotFound`, `Configuration`) or
/// a maintainer (`Internal`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Configuration,
    Internal,
}

pub type NextkitResult<T> = Result<T, NextkitError>;
