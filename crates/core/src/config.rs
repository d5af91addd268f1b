use crate::stem::DEFAULT_STEM_FORMAT;
use anyhow::{bail, Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Component, Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub stem_format: String,
    pub metadata_fallback: bool,
    pub sort_entries: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            stem_format: DEFAULT_STEM_FORMAT.to_string(),
            metadata_fallback: true,
            sort_entries: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppPaths {
    pub config_path: PathBuf,
}

pub fn app_paths() -> Result<AppPaths> {
    let proj = ProjectDirs::from("com", "photo-stamp", "photo-stamp")
        .context("could not determine the OS config directory")?;
    Ok(AppPaths {
        config_path: proj.config_dir().join("config.toml"),
    })
}

/// Loads `explicit` if given (it must exist), else the per-user config file.
/// A missing per-user file means defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig> {
    let path = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("config file not found: {}", path.display());
            }
            path.to_path_buf()
        }
        None => {
            let paths = app_paths()?;
            if !paths.config_path.exists() {
                return Ok(AppConfig::default());
            }
            paths.config_path
        }
    };

    let raw = fs::read_to_string(&path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config = toml::from_str::<AppConfig>(&raw)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(config)
}

/// Replaces a leading `~` segment with `$HOME`. Only the first segment is
/// substituted; nothing else in the path is interpolated.
pub fn expand_home(input: &Path) -> Result<PathBuf> {
    let mut components = input.components();
    match components.next() {
        Some(Component::Normal(first)) if first.to_string_lossy().starts_with('~') => {
            let home = env::var_os("HOME").context("HOME is not set")?;
            Ok(PathBuf::from(home).join(components.as_path()))
        }
        _ => Ok(input.to_path_buf()),
    }
}
