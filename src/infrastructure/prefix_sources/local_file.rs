//! Local file prefix source
//!
//! Reads the leading bytes of a file on the local filesystem.

use crate::domain::entities::FileIdentity;
use crate::domain::repositories::{PrefixReadError, PrefixSource};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

/// A file on the local filesystem
///
/// Metadata is gathered once at construction on a best-effort basis; a
/// missing or unreadable file only surfaces as an error when its prefix is
/// read, so it can be reported alongside the rest of the batch.
///
/// # Example
///
/// ```no_run
/// use mimesniff::domain::repositories::PrefixSource;
/// use mimesniff::infrastructure::prefix_sources::LocalFile;
///
/// let file = LocalFile::new("upload.bin", "image/png");
/// let prefix = file.read_prefix(128)?;
/// # Ok::<(), mimesniff::domain::repositories::PrefixReadError>(())
/// ```
#[derive(Debug, Clone)]
pub struct LocalFile {
    path: PathBuf,
    identity: FileIdentity,
    declared_type: String,
}

impl LocalFile {
    /// Creates a source for `path` with the type the environment declared
    pub fn new(path: impl AsRef<Path>, declared_type: impl Into<String>) -> Self {
        let path = path.as_ref().to_path_buf();
        let identity = Self::read_identity(&path);
        Self {
            path,
            identity,
            declared_type: declared_type.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_identity(path: &Path) -> FileIdentity {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        match path.metadata() {
            Ok(metadata) => {
                let modified = metadata
                    .modified()
                    .ok()
                    .and_then(|t| t.duration_since(UNIX_EPOCH).ok())
                    .map(|d| d.as_millis() as u64);
                FileIdentity::new(name, metadata.len(), modified)
            }
            Err(e) => {
                tracing::debug!("No metadata for {}: {}", path.display(), e);
                FileIdentity::new(name, 0, None)
            }
        }
    }
}

impl PrefixSource for LocalFile {
    fn identity(&self) -> &FileIdentity {
        &self.identity
    }

    fn declared_type(&self) -> &str {
        &self.declared_type
    }

    fn read_prefix(&self, max_len: usize) -> Result<Vec<u8>, PrefixReadError> {
        let display = || self.path.display().to_string();

        let file = File::open(&self.path).map_err(|e| PrefixReadError::from_io(display(), e))?;

        let mut prefix = Vec::with_capacity(max_len.min(self.identity.size as usize));
        file.take(max_len as u64)
            .read_to_end(&mut prefix)
            .map_err(|e| PrefixReadError::from_io(display(), e))?;

        Ok(prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn reads_at_most_max_len() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big.bin");
        let mut file = File::create(&path).unwrap();
        file.write_all(&[0xAB; 5000]).unwrap();

        let source = LocalFile::new(&path, "");
        assert_eq!(source.read_prefix(128).unwrap().len(), 128);
        assert_eq!(source.identity().size, 5000);
        assert_eq!(source.identity().name, "big.bin");
    }

    #[test]
    fn short_file_returns_whole_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("tiny.txt");
        std::fs::write(&path, b"hi").unwrap();

        assert_eq!(LocalFile::new(&path, "text/plain").read_prefix(4100).unwrap(), b"hi");
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let source = LocalFile::new(dir.path().join("gone.png"), "image/png");

        assert_eq!(source.identity().size, 0);
        assert!(matches!(
            source.read_prefix(128),
            Err(PrefixReadError::NotFound(_))
        ));
    }
}
