//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `nextkit-adapters` crate provides implementations.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::{ExternalCommand, FeatureId};
use crate::error::NextkitResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `nextkit_adapters::filesystem::LocalFilesystem` (production)
/// - `nextkit_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> NextkitResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> NextkitResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> NextkitResult<String>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> NextkitResult<()>;
}

/// Port for blocking external processes.
///
/// Implementations stream the child's output to the user and return only
/// after it exits. A non-zero exit is an
/// [`ApplicationError::ExternalProcess`](crate::application::ApplicationError).
#[cfg_attr(test, automock)]
pub trait CommandRunner: Send + Sync {
    fn run(&self, command: &ExternalCommand) -> NextkitResult<()>;
}

/// Port for the interactive feature questions.
#[cfg_attr(test, automock)]
pub trait FeaturePrompt {
    /// Ask whether `feature` should be enabled.
    fn confirm(&self, feature: FeatureId) -> NextkitResult<bool>;
}
