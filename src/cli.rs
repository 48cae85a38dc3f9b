use std::path::PathBuf;

use clap::Parser;

/// Command-line surface. Every flag is optional; a bare invocation backs up
/// `project_files/` into `backups/`.
#[derive(Parser, Debug, Default)]
#[command(
    name = "scout-backup",
    version,
    about = "Copy project_files/ into a timestamped folder under backups/"
)]
pub struct Cli {
    /// TOML file overriding the default directory layout.
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,
    /// Directory to back up.
    #[arg(long = "source", value_name = "DIR")]
    pub source: Option<PathBuf>,
    /// Directory that receives the snapshots and the log.
    #[arg(long = "backup-root", value_name = "DIR")]
    pub backup_root: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}
