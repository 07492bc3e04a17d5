use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::options::{AvatarOptions, DefaultImage, Rating, DEFAULT_SIZE};

/// Default avatar options loaded from `~/.config/gravatar/config.toml`.
///
/// Every field is optional in the file; missing ones take the built-in
/// defaults. Command-line flags override these values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravatarConfig {
    /// Image size in pixels.
    pub size: i32,
    /// Named default image code: "", "404", "mm", "identicon", "monsterid", "wavatar", "retro".
    pub default_image: DefaultImage,
    /// Custom default image URL; wins over `default_image` when non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_image_url: Option<String>,
    /// Always serve the default image.
    pub force_default: bool,
    /// Highest rating to serve: "g", "pg", "r" or "x".
    pub rating: Rating,
    /// Always use https.
    pub force_secure: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css_class: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl Default for GravatarConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            default_image: DefaultImage::Default,
            default_image_url: None,
            force_default: false,
            rating: Rating::G,
            force_secure: false,
            css_class: None,
            alt: None,
        }
    }
}

impl GravatarConfig {
    /// Options seeded from this config.
    pub fn avatar_options(&self) -> AvatarOptions {
        AvatarOptions {
            size: self.size,
            default_image: self.default_image,
            default_image_url: self.default_image_url.clone(),
            force_default: self.force_default,
            rating: self.rating,
            force_secure: self.force_secure,
            css_class: self.css_class.clone(),
            alt: self.alt.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("gravatar")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<GravatarConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = GravatarConfig::default();
        write_to_path(&default_cfg, &path)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }
    load_from_path(&path)
}

/// Read and parse a config file.
pub fn load_from_path(path: &Path) -> Result<GravatarConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: GravatarConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}

/// Write `cfg` as TOML, creating the parent directory if needed.
pub fn write_to_path(cfg: &GravatarConfig, path: &Path) -> Result<()> {
    let toml = toml::to_string_pretty(cfg).context("serialize config")?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir: {}", parent.display()))?;
    }
    fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
    Ok(())
}
