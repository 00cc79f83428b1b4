//! Config schema and deserialization

use crate::reporter::console::DEFAULT_BAR_WIDTH;
use crate::reporter::OutputFormat;
use serde::Deserialize;

pub const MIN_BAR_WIDTH: u8 = 10;
pub const MAX_BAR_WIDTH: u8 = 100;

/// Root config structure for .psycherc.json
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Config {
    /// Output renderer when no format flag is given. Default: console
    #[serde(default)]
    pub format: Option<OutputFormat>,

    /// Characters in a 100% strength bar (10-100). Default: 50
    #[serde(default)]
    pub bar_width: Option<u8>,

    /// Colored console output. Default: true
    #[serde(default)]
    pub color: Option<bool>,

    /// Respondent name shown in the text export header
    #[serde(default)]
    pub name: Option<String>,
}

impl Config {
    /// Merge CLI overrides into config. CLI values take precedence.
    pub fn merge_with_cli(
        mut self,
        cli_format: Option<OutputFormat>,
        cli_no_color: bool,
        cli_name: Option<String>,
    ) -> Self {
        if cli_format.is_some() {
            self.format = cli_format;
        }
        if cli_no_color {
            self.color = Some(false);
        }
        if cli_name.is_some() {
            self.name = cli_name;
        }
        self
    }

    /// Reject values the reporters cannot honor
    pub fn validate(&self) -> Result<(), String> {
        if let Some(width) = self.bar_width {
            if !(MIN_BAR_WIDTH..=MAX_BAR_WIDTH).contains(&width) {
                return Err(format!(
                    "barWidth must be between {} and {}, got {}",
                    MIN_BAR_WIDTH, MAX_BAR_WIDTH, width
                ));
            }
        }
        Ok(())
    }

    pub fn output_format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    pub fn bar_width(&self) -> usize {
        self.bar_width
            .map(usize::from)
            .unwrap_or(DEFAULT_BAR_WIDTH)
    }

    pub fn use_colors(&self) -> bool {
        self.color.unwrap_or(true)
    }
}
