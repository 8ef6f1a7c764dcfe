use anyhow::{Context, Result};
use base64::{Engine as _, engine::general_purpose::STANDARD};

use super::SaveData;

/// Wire form of a save: compact JSON, camelCase keys.
pub fn save_to_json_string(data: &SaveData) -> Result<String> {
    serde_json::to_string(data).context("save data did not serialize")
}

/// Parses a save of any supported version and re-stamps it to the current
/// schema.
pub fn load_from_json_string(json: &str) -> Result<SaveData> {
    let mut data: SaveData = serde_json::from_str(json).context("save JSON did not parse")?;
    data.normalize();
    Ok(data)
}

/// Single-line share string for moving progress between machines.
pub fn export_to_base64(data: &SaveData) -> Result<String> {
    Ok(STANDARD.encode(save_to_json_string(data)?))
}

pub fn import_from_base64(encoded: &str) -> Result<SaveData> {
    let bytes = STANDARD
        .decode(encoded.trim())
        .context("share string is not valid base64")?;
    let json = String::from_utf8(bytes).context("share string payload is not UTF-8")?;
    load_from_json_string(&json)
}
