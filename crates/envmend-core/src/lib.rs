pub mod config;
pub mod error;
pub mod format;
pub mod patcher;
pub mod targets;

pub use error::PatchError;
pub use patcher::{ensure_patch_file, PatchOutcome};
pub use targets::{builtin_targets, PatchTarget, DEFAULT_ROOT};
