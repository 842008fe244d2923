//! Patch-target manifest.
//!
//! A target is a dependency-installation root plus the relative path of the
//! file the installed tree should contain but may not. The built-in manifest
//! lists the packaging defects this tool exists to work around; the CLI can
//! replace it with explicit `--target` paths.

use std::path::{Path, PathBuf};

/// Default dependency-installation root the built-in targets live under.
pub const DEFAULT_ROOT: &str = "node_modules";

/// A file whose presence is ensured inside a dependency-installation root.
#[derive(Debug, Clone)]
pub struct PatchTarget {
    root: PathBuf,
    relative: PathBuf,
}

impl PatchTarget {
    pub fn new(root: &Path, relative: impl Into<PathBuf>) -> Self {
        Self {
            root: root.to_path_buf(),
            relative: relative.into(),
        }
    }

    /// Path relative to the installation root.
    pub fn relative(&self) -> &Path {
        &self.relative
    }

    /// Full path on disk.
    pub fn resolved(&self) -> PathBuf {
        self.root.join(&self.relative)
    }
}

/// A known packaging defect: an installed package whose published tarball
/// omits a file its own entry point references.
struct BuiltinTarget {
    package: &'static str,
    missing_file: &'static str,
}

const BUILTIN_TARGETS: &[BuiltinTarget] = &[BuiltinTarget {
    package: "react-native-gesture-handler",
    missing_file: "lib/commonjs/index.flow.js",
}];

/// Built-in manifest resolved against `root`.
pub fn builtin_targets(root: &Path) -> Vec<PatchTarget> {
    BUILTIN_TARGETS
        .iter()
        .map(|t| PatchTarget::new(root, Path::new(t.package).join(t.missing_file)))
        .collect()
}
