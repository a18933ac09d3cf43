use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "staffbook", bin_name = "staffbook", version = get_version())]
#[command(disable_help_subcommand = true)]
#[command(
    about = "Employee address book for the command line",
    long_about = "Employee address book for the command line.\n\n\
        Any unrecognised subcommand is run as address book command text, e.g.\n  \
        staffbook add n/Alex Yeoh p/3200 l/2\n  \
        staffbook filter payroll \">=\" 3000\n  \
        staffbook --picture ./alex.jpg setpicture 1\n\n\
        Options must come before the command text.\n\n\
        Run without arguments for an interactive shell."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $STAFFBOOK_HOME, then the OS data directory)
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Source picture for `setpicture`, instead of prompting
    #[arg(long, global = true, value_name = "FILE")]
    pub picture: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start an interactive session
    #[command(alias = "sh")]
    Shell,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., picture-dir)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Address book command text, e.g. `filter payroll >= 3000`
    #[command(external_subcommand)]
    Line(Vec<String>),
}
