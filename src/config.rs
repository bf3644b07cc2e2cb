use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".glyphrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Component identifier the templates use, snake_cased into the tag
    /// that is searched for (`icon` -> `<x-icon>`).
    #[serde(default = "default_name")]
    pub name: String,
    /// Filename glob matched against template files during the scan.
    #[serde(default = "default_templates")]
    pub templates: String,
    /// Directory basenames that are never traversed into.
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
    #[serde(default = "default_icon_dir")]
    pub icon_dir: String,
    #[serde(default = "default_cache_dir")]
    pub cache_dir: String,
}

fn default_name() -> String {
    "icon".to_string()
}

fn default_templates() -> String {
    "*.tpl".to_string()
}

fn default_exclude() -> Vec<String> {
    ["node_modules", "vendor"].map(String::from).to_vec()
}

fn default_icon_dir() -> String {
    "icons".to_string()
}

fn default_cache_dir() -> String {
    "cache/icons".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: default_name(),
            templates: default_templates(),
            exclude: default_exclude(),
            icon_dir: default_icon_dir(),
            cache_dir: default_cache_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The component name ends up embedded in the extraction pattern, so
    /// anything that cannot appear in a markup tag is rejected here rather
    /// than silently matching nothing.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            anyhow::bail!("Invalid 'name' in config: must not be empty");
        }

        if self
            .name
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '<' | '>' | '/'))
        {
            anyhow::bail!(
                "Invalid 'name' in config: \"{}\" contains characters not allowed in a component tag",
                self.name
            );
        }

        Ok(())
    }

    /// Compile the template filename glob.
    pub fn template_pattern(&self) -> Result<Pattern> {
        Pattern::new(&self.templates)
            .with_context(|| format!("Invalid glob pattern in 'templates': \"{}\"", self.templates))
    }

    pub fn exclude_set(&self) -> HashSet<String> {
        self.exclude.iter().cloned().collect()
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

pub fn load_config(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Load the nearest config above `start_dir`, falling back to defaults when
/// no config file exists.
pub fn load_or_default(start_dir: &Path) -> Result<Config> {
    // Canonicalize so a relative root like "." can still walk up the tree.
    let start = start_dir
        .canonicalize()
        .unwrap_or_else(|_| start_dir.to_path_buf());

    match find_config_file(&start) {
        Some(path) => load_config(&path),
        None => Ok(Config::default()),
    }
}
