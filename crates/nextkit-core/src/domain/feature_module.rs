//! Feature modules.
//!
//! The set of modules is closed: [`FeatureModule::resolve`] maps every
//! [`FeatureId`] to its declaration with an exhaustive `match`. A module is
//! pure data (what to install, which files to write, which manifest entries
//! to contribute); applying it is the job of the application layer.

use std::path::{Path, PathBuf};


use crate::domain::{
    assets,
    error::DomainError,
    feature::FeatureId,
    manifest::Manifest,
};

/// Packages to add with the package manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageInstall {
    pub packages: Vec<&'static str>,
    pub dev: bool,
}

impl PackageInstall {
    pub fn runtime(packages: &[&'static str]) -> Self {
        Self {
            packages: packages.to_vec(),
            dev: false,
        }
    }

    pub fn dev(packages: &[&'static str]) -> Self {
        Self {
            packages: packages.to_vec(),
            dev: true,
        }
    }
}

/// A file a module writes, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileWrite {
    pub path: PathBuf,
    pub content: &'static str,
}

impl FileWrite {
    pub fn new(path: impl Into<PathBuf>, content: &'static str) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// Declaration of one optional feature.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureModule {
    id: FeatureId,
    installs: Vec<PackageInstall>,
    ensure_dirs: Vec<PathBuf>,
    writes: Vec<FileWrite>,
    ignore_entries: Vec<&'static str>,
    fragment: Manifest,
}

impl FeatureModule {
    fn empty(id: FeatureId) -> Self {
        Self {
            id,
            installs: Vec::new(),
            ensure_dirs: Vec::new(),
            writes: Vec::new(),
            ignore_entries: Vec::new(),
            fragment: Manifest::new(),
        }
    }

    /// The module declaration for a feature.
    pub fn resolve(id: FeatureId) -> Self {
        let module = Self::empty(id);
        match id {
            FeatureId::Testing => module
                .install(PackageInstall::dev(&[
                    "jest",
                    "jest-environment-jsdom",
                    "@testing-library/react",
                    "@testing-library/jest-dom",
                ]))
                .write("jest.config.js", assets::JEST_CONFIG)
                .write("jest.setup.js", assets::JEST_SETUP)
                .contribute(Manifest::new().with_script("test", "jest")),

            FeatureId::Docker => module
                .write("Dockerfile", assets::DOCKERFILE)
                .write("docker-compose.yml", assets::DOCKER_COMPOSE),

            FeatureId::StateManagement => module
                .install(PackageInstall::runtime(&["@reduxjs/toolkit", "react-redux"]))
                .ensure_dir("src/store")
                .write("src/store/index.ts", assets::REDUX_STORE),

            FeatureId::DeploymentScripts => module.contribute(
                Manifest::new()
                    .with_script("build", "next build")
                    .with_script("deploy:vercel", "vercel --prod"),
            ),

            FeatureId::EnvironmentManagement => module
                .write(".env", assets::ENV_DEFAULTS)
                .write(".env.local", assets::ENV_DEFAULTS)
                .write(".env.production", assets::ENV_DEFAULTS)
                .ignore(".env.local"),

            FeatureId::PerformanceMonitoring => module
                .install(PackageInstall::dev(&["@next/bundle-analyzer"]))
                .write("next.config.js", assets::NEXT_CONFIG_WITH_ANALYZER)
                .contribute(Manifest::new().with_script("analyze", "ANALYZE=true next build")),
        }
    }

    // ── Declaration helpers ───────────────────────────────────────────────

    fn install(mut self, install: PackageInstall) -> Self {
        self.installs.push(install);
        self
    }

    fn ensure_dir(mut self, dir: &str) -> Self {
        self.ensure_dirs.push(PathBuf::from(dir));
        self
    }

    fn write(mut self, path: &str, content: &'static str) -> Self {
        self.writes.push(FileWrite::new(path, content));
        self
    }

    fn ignore(mut self, pattern: &'static str) -> Self {
        self.ignore_entries.push(pattern);
        self
    }

    fn contribute(mut self, fragment: Manifest) -> Self {
        self.fragment = fragment;
        self
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> FeatureId {
        self.id
    }

    pub fn installs(&self) -> &[PackageInstall] {
        &self.installs
    }

    pub fn ensure_dirs(&self) -> &[PathBuf] {
        &self.ensure_dirs
    }

    pub fn writes(&self) -> &[FileWrite] {
        &self.writes
    }

    pub fn ignore_entries(&self) -> &[&'static str] {
        &self.ignore_entries
    }

    pub fn fragment(&self) -> &Manifest {
        &self.fragment
    }

    /// Every declared path must stay inside the project.
    pub fn validate(&self) -> Result<(), DomainError> {
        let paths = self
            .ensure_dirs
            .iter()
            .map(PathBuf::as_path)
            .chain(self.writes.iter().map(|w| w.path.as_path()));

        for path in paths {
            if path.is_absolute() {
                return Err(DomainError::AbsolutePathNotAllowed {
                    path: path.display().to_string(),
                });
            }
        }
        Ok(())
    }

    /// `true` if the module writes `path`.
    pub fn writes_path(&self, path: &Path) -> bool {
        self.writes.iter().any(|w| w.path == path)
    }
}

/// Append `pattern` to an ignore file body unless a line already matches.
///
/// Returns `None` when the pattern is already present.
pub fn append_ignore_entry(existing: &str, pattern: &str) -> Option<String> {
    if existing.lines().any(|line| line.trim() == pattern) {
        return None;
    }

    let mut updated = existing.to_string();
    if !updated.is_empty() && !updated.ends_with('\n') {
        updated.push('\n');
    }
    updated.push_str(pattern);
    updated.push('\n');
    Some(updated)
}
