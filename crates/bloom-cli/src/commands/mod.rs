//! CLI command implementations

pub mod classify;
pub mod init;
pub mod layout;
pub mod simulate;

use anyhow::{Context, Result};
use bloom_scene::SceneConfig;

/// Load a scene config, or the defaults when no path is given
pub fn load_config(path: Option<&str>) -> Result<SceneConfig> {
    match path {
        Some(p) => {
            log::info!("loading scene config from {p}");
            SceneConfig::load(p).with_context(|| format!("loading config {p}"))
        }
        None => {
            log::debug!("no config given, using defaults");
            Ok(SceneConfig::default())
        }
    }
}
