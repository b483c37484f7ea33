// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside run reports)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown feature '{0}'")]
    UnknownFeature(String),
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use lowercase letters, digits, hyphens and underscores".into(),
                "Examples: my-app, shop_front, site2".into(),
            ],
            Self::InvalidManifest(msg) => vec![
                "package.json could not be understood".into(),
                format!("Details: {}", msg),
                "Check that the base generator finished successfully".into(),
            ],
            Self::UnknownFeature(name) => vec![
                format!("'{}' is not a known feature", name),
                "Known features: testing, docker, stateManagement, deploymentScripts, \
                 environmentManagement, performanceMonitoring"
                    .into(),
            ],
            Self::AbsolutePathNotAllowed { .. } => {
                vec!["Feature and template paths must be relative to the project".into()]
            }
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidManifest(_) => ErrorCategory::Validation,
            Self::UnknownFeature(_) => ErrorCategory::NotFound,
            Self::AbsolutePathNotAllowed { .. } => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
