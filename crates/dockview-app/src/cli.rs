use std::path::PathBuf;

use clap::Parser;

/// Dockview: dockable panels with embedded web content.
#[derive(Parser, Debug)]
#[command(name = "dockview", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log filter directive override (e.g. `dockview=debug`).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory served under `dockview://localhost/`.
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
