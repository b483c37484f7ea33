use std::path::{Path, PathBuf};

use crate::domain::error::DomainError;

const MANIFEST_FILE: &str = "package.json";
const IGNORE_FILE: &str = ".gitignore";

/// Directories of a single run.
///
/// Owned by the orchestrator for the duration of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectContext {
    app_name: String,
    project_dir: PathBuf,
    original_dir: PathBuf,
}

impl ProjectContext {
    /// Resolve the project directory for `app_name` under `working_dir`.
    pub fn new(app_name: &str, working_dir: impl Into<PathBuf>) -> Result<Self, DomainError> {
        validate_project_name(app_name)?;
        let original_dir = working_dir.into();

        Ok(Self {
            app_name: app_name.to_string(),
            project_dir: original_dir.join(app_name),
            original_dir,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    pub fn original_dir(&self) -> &Path {
        &self.original_dir
    }

    /// A path inside the project.
    pub fn path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.project_dir.join(relative)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.path(MANIFEST_FILE)
    }

    pub fn ignore_file(&self) -> PathBuf {
        self.path(IGNORE_FILE)
    }

    /// Temporary checkout of the template repository, next to the project.
    pub fn template_checkout_dir(&self) -> PathBuf {
        self.original_dir.join(format!("{}-template", self.app_name))
    }
}

/// Project names become directory names and npm package names.
pub fn validate_project_name(name: &str) -> Result<(), DomainError> {
    let invalid = |reason: &str| DomainError::InvalidProjectName {
        name: name.into(),
        reason: reason.into(),
    };

    if name.trim().is_empty() {
        return Err(invalid("name cannot be empty"));
    }
    if name.starts_with('.') || name.starts_with('_') {
        return Err(invalid("name cannot start with '.' or '_'"));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("name cannot contain path separators"));
    }
    if name.len() > 214 {
        return Err(invalid("name cannot be longer than 214 characters"));
    }
    if let Some(c) = name
        .chars()
        .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || matches!(c, '-' | '_' | '.')))
    {
        return Err(invalid(&format!("character '{c}' is not allowed")));
    }
    Ok(())
}
