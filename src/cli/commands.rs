use std::path::PathBuf;

use clap::Parser;

use crate::model::FilterMode;

#[derive(Parser, Debug)]
#[command(name = "tl", about = concat!("[x] tasklist v", env!("CARGO_PKG_VERSION"), " - drag your day into order"), version)]
pub struct Cli {
    /// Config file (default: <config dir>/tasklist/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial filter: all, active or completed
    #[arg(long)]
    pub filter: Option<FilterMode>,

    /// Seed the list with a task (repeatable; nothing is saved)
    #[arg(short = 't', long = "task", value_name = "TEXT")]
    pub tasks: Vec<String>,

    /// Log file (default: <data dir>/tasklist/tasklist.log)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}
