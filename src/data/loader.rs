use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::Config;

const CONFIG_RELATIVE_PATH: &str = "assets/cfg.json";

pub fn config_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(CONFIG_RELATIVE_PATH)
}

pub fn load_config() -> Result<Config> {
    load_config_from_path(config_path())
}

pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed reading config file: {}", path.display()))?;

    config_from_str(&raw).with_context(|| format!("failed loading config file: {}", path.display()))
}

pub fn config_from_str(raw: &str) -> Result<Config> {
    serde_json::from_str(raw).context("config is not structurally valid JSON")
}
