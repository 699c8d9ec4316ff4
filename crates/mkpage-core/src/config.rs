use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Global configuration loaded from `~/.config/mkpage/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MkpageConfig {
    /// Root directory pages are scaffolded under. Relative paths are resolved
    /// against the current working directory at invocation time.
    pub pages_root: PathBuf,
}

impl Default for MkpageConfig {
    fn default() -> Self {
        Self {
            pages_root: PathBuf::from("pages"),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("mkpage")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<MkpageConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = MkpageConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: MkpageConfig = toml::from_str(&data)?;
    Ok(cfg)
}
