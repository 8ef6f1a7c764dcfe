use serde::{Deserialize, Serialize};

pub const SAVE_VERSION: u32 = 2;

/// Persisted player state. Every field defaults so files written by older
/// builds (v1 had no `oxyTier`) still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SaveData {
    pub version: u32,
    pub score: i64,
    pub lube_tier: i16,
    pub gravity_tier: i16,
    pub oxy_tier: i16,
    pub prestige: i16,
}

impl Default for SaveData {
    fn default() -> Self {
        Self {
            version: SAVE_VERSION,
            score: 0,
            lube_tier: 0,
            gravity_tier: 0,
            oxy_tier: 0,
            prestige: 0,
        }
    }
}

impl SaveData {
    /// Stamps the current schema version after a load from any older build.
    pub fn normalize(&mut self) {
        self.version = SAVE_VERSION;
    }
}

/// In-memory save plus the dirty flag that gates write frequency. The flag
/// is runtime-only and never serialized.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Savefile {
    pub data: SaveData,
    pub dirty: bool,
}

impl Savefile {
    pub fn new(data: SaveData) -> Self {
        Self { data, dirty: false }
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }
}
