//! Idempotent check-then-create for patch targets.
//!
//! The engine reports a structured outcome and never logs; the single call
//! site in the binary decides how to surface it.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::PatchError;

/// Which branch `ensure_patch_file` took on success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchOutcome {
    /// The target was missing and has been created empty.
    Created,
    /// A filesystem entry already exists at the target; nothing was touched.
    AlreadyPresent,
}

/// Ensure an empty file exists at `path`.
///
/// Existing entries are never modified or truncated. Missing ancestor
/// directories are created first. The final step uses `create_new`, the
/// atomic create-if-absent primitive, so a concurrent process winning the
/// race between the existence check and the create is reported as
/// `AlreadyPresent` rather than as a failure.
pub fn ensure_patch_file(path: &Path) -> Result<PatchOutcome, PatchError> {
    match path.try_exists() {
        Ok(true) => return Ok(PatchOutcome::AlreadyPresent),
        Ok(false) => {}
        Err(e) => return Err(classify(path, e)),
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| classify(parent, e))?;
        }
    }

    match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(_) => Ok(PatchOutcome::Created),
        Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(PatchOutcome::AlreadyPresent),
        Err(e) => Err(classify(path, e)),
    }
}

/// Map a raw I/O error onto the patch error taxonomy.
///
/// A file sitting where a directory is needed does not surface as
/// `ErrorKind::NotADirectory` on every platform (Windows reports it as a
/// path error), so ambiguous kinds fall back to scanning the ancestors for
/// the offending component.
fn classify(path: &Path, source: io::Error) -> PatchError {
    match source.kind() {
        io::ErrorKind::PermissionDenied => PatchError::PermissionDenied {
            path: path.to_path_buf(),
            source,
        },
        io::ErrorKind::NotADirectory => PatchError::NotADirectory {
            path: blocking_component(path).unwrap_or_else(|| path.to_path_buf()),
        },
        _ => match blocking_component(path) {
            Some(component) => PatchError::NotADirectory { path: component },
            None => PatchError::Io {
                path: path.to_path_buf(),
                source,
            },
        },
    }
}

/// Ancestor that exists as a plain file and therefore blocks directory
/// creation. At most one such component can exist.
fn blocking_component(path: &Path) -> Option<PathBuf> {
    path.ancestors()
        .find(|a| !a.as_os_str().is_empty() && a.is_file())
        .map(Path::to_path_buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn creates_missing_file_and_parents() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("node_modules/some-lib/dist/index.js");
        assert_eq!(ensure_patch_file(&target).unwrap(), PatchOutcome::Created);
        assert!(target.is_file());
        assert_eq!(fs::read(&target).unwrap().len(), 0);
    }

    #[test]
    fn second_run_is_a_noop() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("pkg/missing.js");
        assert_eq!(ensure_patch_file(&target).unwrap(), PatchOutcome::Created);
        assert_eq!(
            ensure_patch_file(&target).unwrap(),
            PatchOutcome::AlreadyPresent
        );
        assert_eq!(fs::read(&target).unwrap().len(), 0);
    }

    #[test]
    fn existing_content_is_never_truncated() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("present.js");
        fs::write(&target, "module.exports = {};").unwrap();
        assert_eq!(
            ensure_patch_file(&target).unwrap(),
            PatchOutcome::AlreadyPresent
        );
        assert_eq!(fs::read_to_string(&target).unwrap(), "module.exports = {};");
    }

    #[test]
    fn target_without_parent_component() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("flat.js");
        assert_eq!(ensure_patch_file(&target).unwrap(), PatchOutcome::Created);
    }

    #[test]
    fn ancestor_file_reports_not_a_directory() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("pkg");
        fs::write(&blocker, "not a directory").unwrap();
        let target = blocker.join("lib/index.js");
        match ensure_patch_file(&target).unwrap_err() {
            PatchError::NotADirectory { path } => assert_eq!(path, blocker),
            other => panic!("expected NotADirectory, got {other:?}"),
        }
        // The blocking file itself is left alone.
        assert_eq!(fs::read_to_string(&blocker).unwrap(), "not a directory");
    }
}
