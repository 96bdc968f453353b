//! Site configuration: the base URL and the secure-admin flag.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Site settings loaded from `~/.config/httpsify/config.toml`.
///
/// Hosts that keep these values in their own option storage can construct
/// `SiteConfig` directly instead of going through [`load_or_init`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// The site's canonical base URL (scheme + host + optional path prefix).
    /// Immutable for the duration of a request.
    pub home_url: String,
    /// Force HTTPS on the admin-facing configuration URLs (site home, site
    /// URL, install URL). The public base URL is forced regardless; this flag
    /// only widens enforcement to the admin keys.
    #[serde(default)]
    pub force_admin_https: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            home_url: "http://localhost".to_string(),
            force_admin_https: false,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("httpsify")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiteConfig = toml::from_str(&data)?;
    Ok(cfg)
}
