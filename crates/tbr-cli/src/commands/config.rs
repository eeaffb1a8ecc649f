//! Config command handlers

use anyhow::{bail, Context, Result};

use tbr_core::Config;

use crate::output::{Output, OutputFormat};

/// Show current configuration
pub fn show(output: &Output) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;

    match output.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "data_dir": config.data_dir,
                    "search_page_size": config.search_page_size
                })
            );
        }
        OutputFormat::Quiet => {
            println!("{}", config.data_dir.display());
        }
        OutputFormat::Human => {
            println!("Configuration:");
            println!("  data_dir:         {}", config.data_dir.display());
            println!("  search_page_size: {}", config.search_page_size);
            println!();
            println!("Config file: {}", Config::config_file_path().display());
        }
    }

    Ok(())
}

/// Set a configuration value
pub fn set(key: String, value: String, output: &Output) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;

    match key.as_str() {
        "data_dir" => {
            config.data_dir = value.clone().into();
        }
        "search_page_size" => {
            let size: usize = value
                .parse()
                .with_context(|| format!("'{}' is not a valid page size", value))?;
            if size == 0 {
                bail!("search_page_size must be at least 1");
            }
            config.search_page_size = size;
        }
        other => bail!(
            "Unknown configuration key '{}' (expected data_dir or search_page_size)",
            other
        ),
    }

    config.save().context("Failed to save configuration")?;
    output.success(&format!("Set {} = {}", key, value));

    Ok(())
}
