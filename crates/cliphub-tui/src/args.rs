use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "cliphub")]
#[command(about = "Terminal client for the clipboard hub", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Base URL of the hub's clip collection
    /// (default: http://127.0.0.1:5000/api/clips, overridable in the config file)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to the config file (default: $CLIPHUB_CONFIG, then the user config dir)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Append diagnostics to this file instead of stderr
    /// (stderr is the TUI canvas, so logging is off unless RUST_LOG is set)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
