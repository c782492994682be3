//! Configuration file support for project-hierarchy.
//!
//! Provides YAML-based configuration through `project-hierarchy.config.yml`
//! files, including data structures, file loading, validation and the merge
//! with command-line flags.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::application::dto::{ImageFormat, ReportOptions, ScanLayout};
use crate::shared::error::HierarchyError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "project-hierarchy.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub project_hierarchy: Option<bool>,
    pub solution_readme: Option<bool>,
    pub directed_graph: Option<bool>,
    pub graphml: Option<bool>,
    pub image: Option<bool>,
    pub image_format: Option<String>,
    pub project_extension: Option<String>,
    pub solution_extension: Option<String>,
    pub source_extension: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Report selections given on the command line.
///
/// Flags are only ever "set"; an unset flag defers to the config file.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub project_hierarchy: bool,
    pub no_solution_readme: bool,
    pub directed_graph: bool,
    pub graphml: bool,
    pub image: bool,
    pub image_format: Option<ImageFormat>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

fn invalid(message: String) -> anyhow::Error {
    HierarchyError::InvalidConfig { message }.into()
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.image_format {
        format.parse::<ImageFormat>().map_err(|e| invalid(e.to_string()))?;
    }

    for (field, value) in [
        ("project_extension", &config.project_extension),
        ("solution_extension", &config.solution_extension),
        ("source_extension", &config.source_extension),
    ] {
        if let Some(extension) = value {
            if extension.len() < 2 || !extension.starts_with('.') {
                return Err(invalid(format!(
                    "{} must start with '.' and name an extension, got \"{}\".\n\n\
                     💡 Hint: Use a value such as \".csproj\".",
                    field, extension
                )));
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Resolves report options: a set CLI flag wins, then the config value,
/// then the default.
pub fn merge_options(cli: &CliOverrides, config: Option<&ConfigFile>) -> Result<ReportOptions> {
    let defaults = ReportOptions::default();
    let pick = |flag: bool, value: Option<bool>, default: bool| {
        if flag {
            true
        } else {
            value.unwrap_or(default)
        }
    };

    let config_format = match config.and_then(|c| c.image_format.as_deref()) {
        Some(format) => Some(format.parse::<ImageFormat>()?),
        None => None,
    };

    Ok(ReportOptions {
        project_hierarchy: pick(
            cli.project_hierarchy,
            config.and_then(|c| c.project_hierarchy),
            defaults.project_hierarchy,
        ),
        solution_readme: if cli.no_solution_readme {
            false
        } else {
            config
                .and_then(|c| c.solution_readme)
                .unwrap_or(defaults.solution_readme)
        },
        directed_graph: pick(
            cli.directed_graph,
            config.and_then(|c| c.directed_graph),
            defaults.directed_graph,
        ),
        graphml: pick(
            cli.graphml,
            config.and_then(|c| c.graphml),
            defaults.graphml,
        ),
        image: pick(cli.image, config.and_then(|c| c.image), defaults.image),
        image_format: cli
            .image_format
            .or(config_format)
            .unwrap_or(defaults.image_format),
    })
}

/// Resolves the descriptor layout from the config file, falling back to defaults.
pub fn merge_layout(config: Option<&ConfigFile>) -> ScanLayout {
    let defaults = ScanLayout::default();
    let Some(config) = config else {
        return defaults;
    };
    ScanLayout {
        project_extension: config
            .project_extension
            .clone()
            .unwrap_or(defaults.project_extension),
        solution_extension: config
            .solution_extension
            .clone()
            .unwrap_or(defaults.solution_extension),
        source_extension: config
            .source_extension
            .clone()
            .unwrap_or(defaults.source_extension),
    }
}
