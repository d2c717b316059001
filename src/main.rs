use clap::Parser;
use tasklist::cli::commands::Cli;
use tasklist::io::config_io::load_config;
use tasklist::io::logging::{default_log_path, setup_logging};

fn main() {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    if let Err(e) = setup_logging(&log_path, cli.verbose) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "config load failed");
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = tasklist::tui::run(config, cli.filter, &cli.tasks) {
        tracing::error!(error = %e, "tui failed");
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
