//! Template Materializer - copies template files into the project tree.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::{CopyMode, TemplateFileSpec},
    error::{NextkitError, NextkitResult},
};

/// Which files a materialization wrote and which it left alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MaterializeSummary {
    pub written: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
}

/// Applies [`TemplateFileSpec`]s from a source tree to a destination tree.
pub struct TemplateMaterializer<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> TemplateMaterializer<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Copy every spec from `source_root` into `dest_root`.
    ///
    /// All sources are checked before anything is written; if any are
    /// missing the error names every one of them and nothing is copied.
    #[instrument(skip_all, fields(source = %source_root.display(), dest = %dest_root.display()))]
    pub fn materialize(
        &self,
        source_root: &Path,
        dest_root: &Path,
        specs: &[TemplateFileSpec],
    ) -> NextkitResult<MaterializeSummary> {
        for spec in specs {
            spec.validate().map_err(NextkitError::Domain)?;
        }

        let missing: Vec<PathBuf> = specs
            .iter()
            .filter(|spec| !self.filesystem.exists(&source_root.join(spec.path())))
            .map(|spec| spec.path().to_path_buf())
            .collect();

        if !missing.is_empty() {
            return Err(ApplicationError::TemplateFileMissing { paths: missing }.into());
        }

        let mut summary = MaterializeSummary::default();
        for spec in specs {
            let dest = dest_root.join(spec.path());

            if spec.mode() == CopyMode::CopyIfAbsent && self.filesystem.exists(&dest) {
                debug!(file = %spec.path().display(), "Kept existing file");
                summary.skipped.push(spec.path().to_path_buf());
                continue;
            }

            if let Some(parent) = dest.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            let content = self
                .filesystem
                .read_to_string(&source_root.join(spec.path()))?;
            self.filesystem.write_file(&dest, &content)?;

            debug!(file = %spec.path().display(), mode = ?spec.mode(), "Copied template file");
            summary.written.push(spec.path().to_path_buf());
        }

        info!(
            written = summary.written.len(),
            skipped = summary.skipped.len(),
            "Template materialized"
        );
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;

    #[test]
    fn reports_every_missing_source_and_writes_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p.ends_with("src/app/page.tsx"));
        fs.expect_write_file().never();

        let specs = [
            TemplateFileSpec::copy_if_absent("src/utils/axios.ts"),
            TemplateFileSpec::overwrite_always("src/app/page.tsx"),
            TemplateFileSpec::overwrite_always("src/app/layout.tsx"),
        ];

        let err = TemplateMaterializer::new(&fs)
            .materialize(Path::new("/tpl"), Path::new("/proj"), &specs)
            .unwrap_err();

        match err {
            NextkitError::Application(ApplicationError::TemplateFileMissing { paths }) => {
                assert_eq!(
                    paths,
                    [
                        PathBuf::from("src/utils/axios.ts"),
                        PathBuf::from("src/app/layout.tsx")
                    ]
                );
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn absolute_spec_is_rejected_before_io() {
        let fs = MockFilesystem::new();
        let err = TemplateMaterializer::new(&fs)
            .materialize(
                Path::new("/tpl"),
                Path::new("/proj"),
                &[TemplateFileSpec::overwrite_always("/etc/hosts")],
            )
            .unwrap_err();
        assert!(matches!(err, NextkitError::Domain(_)));
    }

    #[test]
    fn copy_if_absent_leaves_differing_destination_alone() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_read_to_string().never();
        fs.expect_write_file().never();

        let summary = TemplateMaterializer::new(&fs)
            .materialize(
                Path::new("/tpl"),
                Path::new("/proj"),
                &[TemplateFileSpec::copy_if_absent("src/utils/axios.ts")],
            )
            .unwrap();

        assert!(summary.written.is_empty());
        assert_eq!(summary.skipped, [PathBuf::from("src/utils/axios.ts")]);
    }
}
