use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::{SaveData, Savefile, codec};

/// File-backed persistence keyed by a fixed path. Reads happen once on
/// entry; writes whenever the dirty flag says so.
#[derive(Debug, Clone)]
pub struct SaveStore {
    path: PathBuf,
}

impl SaveStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn load(&self) -> Result<SaveData> {
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed reading save file: {}", self.path.display()))?;
        codec::load_from_json_string(&raw)
            .with_context(|| format!("failed loading save file: {}", self.path.display()))
    }

    /// Writes the save and clears the dirty flag on success.
    pub fn persist(&self, save: &mut Savefile) -> Result<()> {
        let json = codec::save_to_json_string(&save.data)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating save directory: {}", parent.display())
            })?;
        }
        fs::write(&self.path, json)
            .with_context(|| format!("failed writing save file: {}", self.path.display()))?;
        save.dirty = false;
        Ok(())
    }
}
