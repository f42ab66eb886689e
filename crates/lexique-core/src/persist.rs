use std::ffi::OsString;
use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Exclusive advisory lock on `<document>.lock`, released on drop
#[derive(Debug)]
pub struct DocumentLock {
    _file: File,
    path: PathBuf,
}

impl DocumentLock {
    /// Block until no other writer holds the document
    pub fn acquire(document: &Path) -> Result<Self> {
        let path = sibling(document, ".lock");
        ensure_parent(&path)?;
        let file = OpenOptions::new()
            .create(true)
            .truncate(false)
            .write(true)
            .open(&path)
            .map_err(StoreError::io(&path))?;

        file.lock_exclusive().map_err(StoreError::io(&path))?;
        debug!("Acquired lock {}", path.display());

        Ok(Self { _file: file, path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub fn read_document(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(StoreError::io(path))
}

/// Replace `path` with `contents` in one step: full buffer to a sibling temp
/// file, then rename over the target. A crash leaves the old file intact.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    ensure_parent(path)?;
    let tmp = sibling(path, &format!(".tmp.{}", std::process::id()));

    fs::write(&tmp, contents).map_err(StoreError::io(&tmp))?;
    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: e,
        });
    }

    debug!("Wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            fs::create_dir_all(parent).map_err(StoreError::io(parent))
        }
        _ => Ok(()),
    }
}

fn sibling(path: &Path, suffix: &str) -> PathBuf {
    let mut name: OsString = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(suffix);
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_content_and_leaves_no_temp() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("doc.tex");

        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();

        assert_eq!(read_document(&path).unwrap(), "second");
        let names: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![OsString::from("doc.tex")]);
    }

    #[test]
    fn lock_file_sits_next_to_document() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("vocab.tex");
        let lock = DocumentLock::acquire(&doc).unwrap();
        assert_eq!(lock.path(), dir.path().join("vocab.tex.lock"));
    }

    #[test]
    fn missing_document_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_document(&dir.path().join("absent.tex")).unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
