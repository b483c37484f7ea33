//! External commands the orchestrator hands to a `CommandRunner`.
//!
//! Commands are plain data: program, arguments and an explicit working
//! directory. The process working directory is never changed.

use std::fmt;
use std::path::{Path, PathBuf};

/// Flags passed to the base generator. Fixed, not user-configurable.
pub const GENERATOR_FLAGS: [&str; 8] = [
    "--typescript",
    "--eslint",
    "--tailwind",
    "--src-dir",
    "--app",
    "--import-alias",
    "@/*",
    "--use-npm",
];

/// An external process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalCommand {
    program: String,
    args: Vec<String>,
    cwd: PathBuf,
}

impl ExternalCommand {
    pub fn new(
        program: impl Into<String>,
        args: impl IntoIterator<Item = impl Into<String>>,
        cwd: impl Into<PathBuf>,
    ) -> Self {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            cwd: cwd.into(),
        }
    }

    /// `npx create-next-app@latest <name> ...` in the working directory.
    pub fn create_next_app(app_name: &str, working_dir: &Path) -> Self {
        let args = ["create-next-app@latest", app_name]
            .into_iter()
            .chain(GENERATOR_FLAGS);
        Self::new("npx", args, working_dir)
    }

    /// `git clone <repository> <dest>`.
    pub fn git_clone(repository: &str, dest: &Path, working_dir: &Path) -> Self {
        Self::new(
            "git",
            [
                "clone".to_string(),
                repository.to_string(),
                dest.display().to_string(),
            ],
            working_dir,
        )
    }

    /// Plain `npm install` of the manifest's dependencies.
    pub fn npm_install(project_dir: &Path) -> Self {
        Self::new("npm", ["install"], project_dir)
    }

    /// `npm install [--save-dev] <packages...>`.
    pub fn npm_add(packages: &[&str], dev: bool, project_dir: &Path) -> Self {
        let mut args = vec!["install".to_string()];
        if dev {
            args.push("--save-dev".to_string());
        }
        args.extend(packages.iter().map(|p| p.to_string()));
        Self::new("npm", args, project_dir)
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }
}

impl fmt::Display for ExternalCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}
