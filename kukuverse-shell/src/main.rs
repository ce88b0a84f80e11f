//! KukuVerse - Main entry point
//!
//! Parses command-line arguments and starts the application.
//!
//! # Usage
//!
//! ```bash
//! kukuverse --help          # Show help
//! kukuverse --dark-mode     # Start in dark mode
//! kukuverse --log-level debug  # Enable debug logging
//! ```

mod app;
mod cli;
mod widgets;

pub use cli::Args;

use clap::Parser;

fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_filter()),
    )
    .init();

    log::info!("Starting KukuVerse");
    log::debug!("CLI args: {:?}", args);

    if args.dark_mode {
        log::info!("Dark mode enabled via CLI");
    }

    // Store args for app to access
    app::set_cli_args(args);

    app::app_main();
}
