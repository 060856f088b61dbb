//! Write a default scene config

use anyhow::{bail, Context, Result};
use bloom_scene::SceneConfig;
use std::path::Path;

pub fn run(path: &str, force: bool) -> Result<()> {
    if Path::new(path).exists() && !force {
        bail!("{path} already exists (use --force to overwrite)");
    }
    let text = SceneConfig::default().to_toml_string()?;
    std::fs::write(path, text).with_context(|| format!("writing {path}"))?;
    println!("Wrote default scene config to {path}");
    Ok(())
}
