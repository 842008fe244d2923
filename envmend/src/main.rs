mod cli;
mod observability;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{info, warn};

use cli::Cli;
use envmend_core::config::PatchConfig;
use envmend_core::{builtin_targets, ensure_patch_file, PatchOutcome, PatchTarget, DEFAULT_ROOT};

fn main() -> ExitCode {
    observability::init_tracing();
    let cli = Cli::parse();

    let targets = resolve_targets(&cli);
    let failures = apply(&targets);

    // Best-effort by default: a broken patch must not abort the setup this
    // runs inside of. --strict opts into a real exit status.
    if failures > 0 && cli.strict {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// CLI flag wins over ENVMEND_ROOT wins over the default root. Explicit
/// --target paths replace the built-in manifest entirely.
fn resolve_targets(cli: &Cli) -> Vec<PatchTarget> {
    let root: PathBuf = cli
        .root
        .clone()
        .or_else(|| PatchConfig::from_env().root)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ROOT));

    if cli.target.is_empty() {
        builtin_targets(&root)
    } else {
        cli.target
            .iter()
            .map(|t| PatchTarget::new(&root, t))
            .collect()
    }
}

/// Apply every target once, logging the branch taken. Returns the number of
/// failures; the caller decides whether those matter.
fn apply(targets: &[PatchTarget]) -> usize {
    let mut failures = 0usize;
    for target in targets {
        let path = target.resolved();
        match ensure_patch_file(&path) {
            Ok(PatchOutcome::Created) => info!(path = %path.display(), "patch applied"),
            Ok(PatchOutcome::AlreadyPresent) => {
                info!(path = %path.display(), "patch unnecessary")
            }
            Err(e) => {
                failures += 1;
                warn!(path = %path.display(), "patch failed: {e}");
            }
        }
    }
    failures
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn explicit_targets_replace_builtin_manifest() {
        let cli = Cli {
            root: Some("deps".to_string()),
            target: vec!["pkg/a.js".to_string(), "pkg/b.js".to_string()],
            strict: false,
        };
        let targets = resolve_targets(&cli);
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].resolved(), PathBuf::from("deps/pkg/a.js"));
    }

    #[test]
    fn no_flags_uses_builtin_manifest_under_default_root() {
        let cli = Cli {
            root: None,
            target: vec![],
            strict: false,
        };
        let targets = resolve_targets(&cli);
        assert!(!targets.is_empty());
        assert!(targets[0].resolved().starts_with(DEFAULT_ROOT));
    }

    #[test]
    fn apply_counts_failures_and_keeps_going() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, "plain file").unwrap();

        let targets = vec![
            PatchTarget::new(dir.path(), "blocked/lib/index.js"),
            PatchTarget::new(dir.path(), "ok/lib/index.js"),
        ];
        assert_eq!(apply(&targets), 1);
        // The second target was still patched.
        assert!(dir.path().join("ok/lib/index.js").is_file());
    }

    #[test]
    fn apply_is_idempotent() {
        let dir = tempdir().unwrap();
        let targets = vec![PatchTarget::new(dir.path(), "pkg/missing.js")];
        assert_eq!(apply(&targets), 0);
        assert_eq!(apply(&targets), 0);
        assert_eq!(
            fs::read(dir.path().join("pkg/missing.js")).unwrap().len(),
            0
        );
    }
}
