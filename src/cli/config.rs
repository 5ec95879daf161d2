//! Config command handlers.
//!
//! Implements `config show`, `config path`, `config init` and `config schema`.

use crate::config::{
    default_config_path, discover_config_file, generate_example_config, generate_json_schema,
    AppConfig, OutputFormat,
};
use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Render the effective configuration as YAML (text) or JSON.
pub fn render_config(config: &AppConfig, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(config).context("Failed to serialize config as JSON")
        }
        OutputFormat::Text => {
            serde_yaml::to_string(config).context("Failed to serialize config as YAML")
        }
    }
}

pub fn run_config_show(
    config: &AppConfig,
    loaded_from: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    match loaded_from {
        Some(path) => eprintln!("# Loaded from {}", path.display()),
        None => eprintln!("# No config file found, showing defaults"),
    }
    println!("{}", render_config(config, format)?.trim_end());
    Ok(())
}

pub fn run_config_path(explicit: Option<&Path>) -> Result<()> {
    match discover_config_file(explicit) {
        Some(path) => println!("{}", path.display()),
        None => eprintln!("No config file found."),
    }
    Ok(())
}

/// Write the commented example config to `target`.
///
/// Refuses to overwrite an existing file unless `force` is set.
pub fn write_example_config(target: &Path, force: bool) -> Result<()> {
    if target.exists() && !force {
        bail!(
            "{} already exists. Remove it first or pass --force.",
            target.display()
        );
    }
    std::fs::write(target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    Ok(())
}

pub fn run_config_init(output: Option<PathBuf>, force: bool) -> Result<()> {
    let target = output.unwrap_or_else(default_config_path);
    write_example_config(&target, force)?;
    eprintln!("Created {}", target.display());
    Ok(())
}

pub fn run_config_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema().context("failed to generate config schema")?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}
