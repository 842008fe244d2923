use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the patch engine.
///
/// These never escape the process: the binary converts them into a logged
/// diagnostic and continues, so a broken patch cannot abort the setup it is
/// embedded in. Callers that do depend on the patch inspect the `Result`.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("permission denied at {}: {source}", path.display())]
    PermissionDenied { path: PathBuf, source: io::Error },

    #[error("{} exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("I/O error at {}: {source}", path.display())]
    Io { path: PathBuf, source: io::Error },
}
