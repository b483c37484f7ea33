//! Template file specifications.
//!
//! The template repository provides a handful of files that are copied on top
//! of the generated project. Whether a file may clobber what the generator
//! produced is policy data carried by each spec.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{error::DomainError, manifest::Manifest};

/// Default template repository.
pub const DEFAULT_TEMPLATE_REPOSITORY: &str =
    "https://github.com/abdulaimusah/nextjs-custom-template.git";

/// How a template file is written into the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum CopyMode {
    /// Write only when the destination does not exist yet.
    CopyIfAbsent,
    /// Replace the destination unconditionally.
    OverwriteAlways,
}

/// A template file path paired with its copy policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateFileSpec {
    path: PathBuf,
    mode: CopyMode,
}

impl TemplateFileSpec {
    pub fn new(path: impl Into<PathBuf>, mode: CopyMode) -> Self {
        Self {
            path: path.into(),
            mode,
        }
    }

    pub fn copy_if_absent(path: impl Into<PathBuf>) -> Self {
        Self::new(path, CopyMode::CopyIfAbsent)
    }

    pub fn overwrite_always(path: impl Into<PathBuf>) -> Self {
        Self::new(path, CopyMode::OverwriteAlways)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn mode(&self) -> CopyMode {
        self.mode
    }

    /// Template paths are always relative to the template/project roots.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.path.is_absolute() {
            return Err(DomainError::AbsolutePathNotAllowed {
                path: self.path.display().to_string(),
            });
        }
        Ok(())
    }

    /// The fixed set of files taken from the template repository.
    pub fn defaults() -> Vec<TemplateFileSpec> {
        vec![
            Self::copy_if_absent("src/components/AppWrapper.tsx"),
            Self::copy_if_absent("src/components/AppLayout.tsx"),
            Self::copy_if_absent("src/utils/axios.ts"),
            Self::copy_if_absent("src/utils/authUtils.ts"),
            Self::copy_if_absent("src/theme/themeConfig.ts"),
            Self::overwrite_always("src/app/layout.tsx"),
            Self::overwrite_always("src/app/page.tsx"),
        ]
    }
}

/// Runtime dependencies the template's components rely on.
pub fn template_dependencies() -> Manifest {
    Manifest::new()
        .with_dependency("@rownd/react", "^2.1.0")
        .with_dependency("antd", "^5.20.5")
        .with_dependency("axios", "^1.7.7")
}
