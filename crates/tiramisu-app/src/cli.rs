use std::path::PathBuf;

use clap::Parser;

/// Tiramisu: host an HTML/JS UI with host functions callable from the page.
#[derive(Parser, Debug)]
#[command(name = "tiramisu", version, about)]
pub struct Args {
    /// HTML file to load instead of the bundled demo page.
    #[arg(long)]
    pub html: Option<PathBuf>,

    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter override (e.g. `debug`, `tiramisu_bridge=trace`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable webview devtools.
    #[arg(long)]
    pub debug: bool,
}

pub fn parse() -> Args {
    Args::parse()
}
