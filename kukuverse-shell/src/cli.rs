//! Command-line interface for KukuVerse
//!
//! # Usage
//!
//! ```bash
//! # Show help
//! kukuverse --help
//!
//! # Start with dark mode
//! kukuverse --dark-mode
//!
//! # Set log level
//! kukuverse --log-level debug
//! ```

use clap::Parser;

/// KukuVerse - AI-powered audio content desktop application
///
/// A desktop UI for composing audio content requests: pick a content type,
/// mood, and duration, then generate. Built with Rust and Makepad.
#[derive(Parser, Debug, Clone)]
#[command(name = "kukuverse")]
#[command(version)]
#[command(about = "AI-powered audio content desktop application", long_about = None)]
pub struct Args {
    /// Start in dark mode
    ///
    /// Forces dark mode at startup regardless of the stored preference or
    /// the OS setting. This can also be toggled from within the application.
    #[arg(long)]
    pub dark_mode: bool,

    /// Log level for output
    ///
    /// Controls the verbosity of log output. Available levels:
    /// error, warn, info, debug, trace
    #[arg(long, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            dark_mode: false,
            log_level: "info".to_string(),
        }
    }
}

impl Args {
    /// Get log level as env_logger filter string
    pub fn log_filter(&self) -> &str {
        match self.log_level.to_lowercase().as_str() {
            "error" => "error",
            "warn" | "warning" => "warn",
            "info" => "info",
            "debug" => "debug",
            "trace" => "trace",
            _ => "info",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::default();
        assert!(!args.dark_mode);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_log_filter() {
        let mut args = Args::default();

        args.log_level = "debug".to_string();
        assert_eq!(args.log_filter(), "debug");

        args.log_level = "WARNING".to_string();
        assert_eq!(args.log_filter(), "warn");

        args.log_level = "invalid".to_string();
        assert_eq!(args.log_filter(), "info");
    }
}
