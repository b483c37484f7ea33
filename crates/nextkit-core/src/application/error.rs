//! Application layer errors.
//!
//! These errors represent failures in orchestration, not policy.
//! Policy errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::FeatureId;
use crate::error::{ErrorCategory, NextkitError};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// An external process could not be spawned or exited non-zero.
    #[error("Failed to execute `{command}`: {reason}")]
    ExternalProcess { command: String, reason: String },

    /// One or more template source files do not exist.
    #[error("Template file(s) missing: {}", display_paths(.paths))]
    TemplateFileMissing { paths: Vec<PathBuf> },

    /// The manifest is missing or unparseable.
    #[error("Cannot read manifest {path}: {reason}")]
    ManifestRead { path: PathBuf, reason: String },

    /// The manifest could not be written.
    #[error("Cannot write manifest {path}: {reason}")]
    ManifestWrite { path: PathBuf, reason: String },

    /// A feature module failed. Never fatal to the run.
    #[error("Feature '{feature}' failed: {source}")]
    ModuleApply {
        feature: FeatureId,
        #[source]
        source: Box<NextkitError>,
    },

    /// The template clone target is already on disk and is not ours to delete.
    #[error("Template checkout directory {path} already exists")]
    TemplateCheckoutExists { path: PathBuf },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Asking the user for the feature selection failed.
    #[error("Feature prompt failed: {reason}")]
    PromptFailed { reason: String },

    /// Filesystem state lock poisoned (in-memory adapters).
    #[error("Adapter state lock poisoned")]
    LockPoisoned,

    /// Port/Adapter not configured.
    #[error("Required adapter not configured: {name}")]
    AdapterNotConfigured { name: &'static str },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ExternalProcess { command, .. } => vec![
                format!("Command failed: {}", command),
                "Ensure the program is installed and in your PATH".into(),
                "Check the command output above for details".into(),
            ],
            Self::TemplateFileMissing { paths } => {
                let mut s = vec!["The template repository is missing required files:".into()];
                s.extend(paths.iter().map(|p| format!("  • {}", p.display())));
                s.push("Check the template.repository setting".into());
                s
            }
            Self::ManifestRead { path, .. } => vec![
                format!("Could not read {}", path.display()),
                "Check that the base generator created the project".into(),
            ],
            Self::ManifestWrite { path, .. } | Self::FilesystemError { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
                "Check available disk space".into(),
            ],
            Self::ModuleApply { feature, .. } => vec![
                format!("The '{}' feature was not fully applied", feature),
                "Other features were applied normally".into(),
            ],
            Self::TemplateCheckoutExists { path } => vec![
                format!("Move or remove '{}' and try again", path.display()),
                "The template is cloned there and deleted after copying".into(),
            ],
            Self::PromptFailed { .. } => vec![
                "Run with --features or --yes to skip interactive prompts".into(),
            ],
            Self::AdapterNotConfigured { name } => vec![
                format!("Required component not configured: {}", name),
                "This is likely a configuration error".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::TemplateFileMissing { .. } | Self::ManifestRead { .. } => ErrorCategory::NotFound,
            Self::TemplateCheckoutExists { .. } => ErrorCategory::Validation,
            Self::ExternalProcess { .. }
            | Self::ManifestWrite { .. }
            | Self::FilesystemError { .. }
            | Self::ModuleApply { .. }
            | Self::PromptFailed { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
            Self::AdapterNotConfigured { .. } => ErrorCategory::Configuration,
        }
    }
}
