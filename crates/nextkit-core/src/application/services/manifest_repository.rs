//! Loading and saving the project manifest through the `Filesystem` port.

use std::path::Path;

use tracing::debug;

use crate::{
    application::{ApplicationError, ports::Filesystem},
    domain::Manifest,
    error::NextkitResult,
};

/// Reads and writes `package.json`.
pub struct ManifestRepository<'a> {
    filesystem: &'a dyn Filesystem,
}

impl<'a> ManifestRepository<'a> {
    pub fn new(filesystem: &'a dyn Filesystem) -> Self {
        Self { filesystem }
    }

    /// Load a manifest; missing or unparseable files are `ManifestRead`.
    pub fn load(&self, path: &Path) -> NextkitResult<Manifest> {
        let read_error = |reason: String| ApplicationError::ManifestRead {
            path: path.to_path_buf(),
            reason,
        };

        if !self.filesystem.exists(path) {
            return Err(read_error("file does not exist".into()).into());
        }

        let text = self
            .filesystem
            .read_to_string(path)
            .map_err(|e| read_error(e.to_string()))?;
        let manifest = Manifest::parse(&text).map_err(|e| read_error(e.to_string()))?;

        debug!(path = %path.display(), scripts = manifest.scripts().len(), "Manifest loaded");
        Ok(manifest)
    }

    /// Save a manifest; any failure is `ManifestWrite`.
    pub fn save(&self, manifest: &Manifest, path: &Path) -> NextkitResult<()> {
        let write_error = |reason: String| ApplicationError::ManifestWrite {
            path: path.to_path_buf(),
            reason,
        };

        let text = manifest
            .to_json_pretty()
            .map_err(|e| write_error(e.to_string()))?;
        self.filesystem
            .write_file(path, &text)
            .map_err(|e| write_error(e.to_string()))?;

        debug!(path = %path.display(), "Manifest saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::output::MockFilesystem;
    use crate::error::NextkitError;

    #[test]
    fn missing_file_is_manifest_read_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(false);

        let err = ManifestRepository::new(&fs)
            .load(Path::new("/p/package.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            NextkitError::Application(ApplicationError::ManifestRead { .. })
        ));
    }

    #[test]
    fn unparseable_file_is_manifest_read_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().return_const(true);
        fs.expect_read_to_string()
            .returning(|_| Ok("not json".to_string()));

        let err = ManifestRepository::new(&fs)
            .load(Path::new("/p/package.json"))
            .unwrap_err();
        assert!(err.to_string().contains("not valid JSON"));
    }

    #[test]
    fn write_failure_is_manifest_write_error() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file().returning(|path, _| {
            Err(ApplicationError::FilesystemError {
                path: path.to_path_buf(),
                reason: "read-only".into(),
            }
            .into())
        });

        let err = ManifestRepository::new(&fs)
            .save(&Manifest::new(), Path::new("/p/package.json"))
            .unwrap_err();
        assert!(matches!(
            err,
            NextkitError::Application(ApplicationError::ManifestWrite { .. })
        ));
    }

    #[test]
    fn save_writes_serialized_manifest() {
        let mut fs = MockFilesystem::new();
        fs.expect_write_file()
            .withf(|path, content| {
                path == Path::new("/p/package.json") && content.contains("\"test\": \"jest\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        ManifestRepository::new(&fs)
            .save(
                &Manifest::new().with_script("test", "jest"),
                Path::new("/p/package.json"),
            )
            .unwrap();
    }
}
