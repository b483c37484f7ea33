//! Applies a single feature module to a project.
//!
//! A module never touches the shared manifest: it returns its fragment in the
//! [`ModuleResult`] and the orchestrator decides what to merge.

use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, Filesystem},
        report::{ModuleResult, ModuleStatus},
    },
    domain::{ExternalCommand, FeatureModule, ProjectContext, append_ignore_entry},
    error::{NextkitError, NextkitResult},
};

pub struct FeatureApplier<'a> {
    filesystem: &'a dyn Filesystem,
    runner: &'a dyn CommandRunner,
}

impl<'a> FeatureApplier<'a> {
    pub fn new(filesystem: &'a dyn Filesystem, runner: &'a dyn CommandRunner) -> Self {
        Self { filesystem, runner }
    }

    /// Apply `module` inside the project of `context`.
    ///
    /// Never returns an error: failures end up in [`ModuleStatus::Failed`],
    /// together with the files written before the failing step.
    #[instrument(skip_all, fields(feature = %module.id()))]
    pub fn apply(&self, module: &FeatureModule, context: &ProjectContext) -> ModuleResult {
        let mut files_written = Vec::new();

        let status = match self.apply_steps(module, context, &mut files_written) {
            Ok(()) => {
                info!(files = files_written.len(), "Feature applied");
                ModuleStatus::Succeeded
            }
            Err(e) => {
                warn!(error = %e, "Feature failed");
                ModuleStatus::Failed {
                    error: ApplicationError::ModuleApply {
                        feature: module.id(),
                        source: Box::new(e),
                    }
                    .into(),
                }
            }
        };

        ModuleResult {
            feature: module.id(),
            files_written,
            fragment: module.fragment().clone(),
            status,
        }
    }

    fn apply_steps(
        &self,
        module: &FeatureModule,
        context: &ProjectContext,
        files_written: &mut Vec<std::path::PathBuf>,
    ) -> NextkitResult<()> {
        module.validate().map_err(NextkitError::Domain)?;

        for install in module.installs() {
            let command =
                ExternalCommand::npm_add(&install.packages, install.dev, context.project_dir());
            debug!(command = %command, "Installing packages");
            self.runner.run(&command)?;
        }

        for dir in module.ensure_dirs() {
            self.filesystem.create_dir_all(&context.path(dir))?;
        }

        for write in module.writes() {
            let path = context.path(&write.path);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, write.content)?;
            debug!(file = %write.path.display(), "Wrote file");
            files_written.push(write.path.clone());
        }

        if !module.ignore_entries().is_empty() {
            self.append_ignore_entries(module, context, files_written)?;
        }

        Ok(())
    }

    fn append_ignore_entries(
        &self,
        module: &FeatureModule,
        context: &ProjectContext,
        files_written: &mut Vec<std::path::PathBuf>,
    ) -> NextkitResult<()> {
        let ignore_file = context.ignore_file();
        let mut contents = if self.filesystem.exists(&ignore_file) {
            self.filesystem.read_to_string(&ignore_file)?
        } else {
            String::new()
        };

        let mut changed = false;
        for pattern in module.ignore_entries() {
            if let Some(updated) = append_ignore_entry(&contents, pattern) {
                contents = updated;
                changed = true;
            } else {
                debug!(pattern, "Ignore entry already present");
            }
        }

        if changed {
            self.filesystem.write_file(&ignore_file, &contents)?;
            files_written.push(".gitignore".into());
        }
        Ok(())
    }
}
