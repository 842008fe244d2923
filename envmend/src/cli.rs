use clap::Parser;

/// envmend - ensure expected files exist in a dependency tree before the app runs
#[derive(Parser, Debug)]
#[command(name = "envmend")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Dependency-installation root (default: ENVMEND_ROOT or "node_modules")
    #[arg(long, value_name = "DIR")]
    pub root: Option<String>,

    /// Target file relative to the root; repeatable. Replaces the built-in manifest.
    #[arg(long, value_name = "PATH")]
    pub target: Vec<String>,

    /// Exit non-zero when a patch fails (default: failures are logged and swallowed)
    #[arg(long, default_value = "false")]
    pub strict: bool,
}
