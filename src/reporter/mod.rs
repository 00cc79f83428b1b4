//! Reporter module for output formatting

pub mod console;
pub mod json;
pub mod text;

pub use console::ConsoleReporter;
pub use json::JsonReporter;
pub use text::TextReporter;

use serde::{Deserialize, Serialize};

/// Which renderer handles a finished assessment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Coloured terminal report with strength bars
    #[default]
    Console,
    /// Machine-readable JSON document
    Json,
    /// Plain-text export
    Text,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Console => write!(f, "console"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}
