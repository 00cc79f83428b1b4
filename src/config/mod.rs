//! Configuration loading for Psyche

mod schema;

pub use schema::{Config, MAX_BAR_WIDTH, MIN_BAR_WIDTH};

use crate::reporter::OutputFormat;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = ".psycherc.json";

/// Find and load the config file. An explicit path must exist; otherwise
/// the working directory and its parents are searched, falling back to
/// defaults when nothing is found.
pub fn load_config(work_dir: &Path, custom_path: Option<&Path>) -> Result<(Config, Option<PathBuf>)> {
    let path = if let Some(p) = custom_path {
        let path = if p.is_absolute() {
            p.to_path_buf()
        } else {
            work_dir.join(p)
        };
        if !path.exists() {
            anyhow::bail!("Config file not found: {}", path.display());
        }
        Some(path)
    } else {
        find_config_in_parents(work_dir)
    };

    match path {
        Some(path) => {
            let config = read_config(&path)?;
            Ok((config, Some(path)))
        }
        None => Ok((Config::default(), None)),
    }
}

fn read_config(config_path: &Path) -> Result<Config> {
    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config: {}", config_path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Invalid JSON in config: {}", config_path.display()))?;
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("{} ({})", e, config_path.display()))?;
    Ok(config)
}

/// Search for .psycherc.json in directory and its parents
fn find_config_in_parents(mut dir: &Path) -> Option<PathBuf> {
    loop {
        let candidate = dir.join(CONFIG_FILENAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = dir.parent()?;
    }
}

/// Starter config written by `psyche init`
pub fn starter_config(format: OutputFormat, bar_width: u8) -> String {
    format!(
        r#"{{
  "format": "{}",
  "barWidth": {},
  "color": true
}}
"#,
        format, bar_width
    )
}
