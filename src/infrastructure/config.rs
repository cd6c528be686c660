use clap::Parser;
use std::path::PathBuf;

/// Command-line configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "bmi-calc", version, about = "Body Mass Index calculator for the terminal")]
pub struct Config {
    /// Height in meters; with --weight, compute once and exit
    #[arg(long, requires = "weight", allow_hyphen_values = true)]
    pub height: Option<String>,

    /// Weight in kilograms; with --height, compute once and exit
    #[arg(long, requires = "height", allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Print the one-shot result as JSON
    #[arg(long, requires = "height")]
    pub json: bool,

    /// Submit without required/step checks
    #[arg(long)]
    pub no_validate: bool,

    /// Append log output to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log filter directive, overridden by RUST_LOG
    #[arg(long, value_name = "FILTER", default_value = "info")]
    pub log_level: String,
}

impl Config {
    pub fn validate_submissions(&self) -> bool {
        !self.no_validate
    }

    /// Height and weight text when running without the UI.
    pub fn headless_inputs(&self) -> Option<(&str, &str)> {
        match (&self.height, &self.weight) {
            (Some(h), Some(w)) => Some((h.as_str(), w.as_str())),
            _ => None,
        }
    }
}
