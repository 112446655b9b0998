//! Configuration for docpanel.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (DOCPANEL_BASE_URL)
//! 2. Config file (.docpanel/config.yaml)
//! 3. Default (http://127.0.0.1:8000)
//!
//! Config file discovery:
//! - Searches current directory and parents for .docpanel/config.yaml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Default base URL when nothing else is configured
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    /// Base URL documents are fetched from
    pub base_url: Option<String>,
}

/// Resolved configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL documents are fetched from
    pub base_url: String,

    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from all sources
    pub fn load() -> Result<Self> {
        let start = std::env::current_dir().context("Failed to determine current directory")?;
        Self::resolve(std::env::var("DOCPANEL_BASE_URL").ok(), &start)
    }

    /// Resolve configuration from an env override and a discovery start
    /// directory
    pub fn resolve(env_base_url: Option<String>, start_dir: &Path) -> Result<Self> {
        let config_file = find_config_file(start_dir);

        let file_base_url = match &config_file {
            Some(path) => load_config_file(path)?.base_url,
            None => None,
        };

        let base_url = env_base_url
            .or(file_base_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self {
            base_url,
            config_file,
        })
    }
}

/// Find config file by searching the start directory and parents
fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(".docpanel").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}
