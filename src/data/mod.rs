mod config;
mod loader;

pub use config::{
    BrickConfig, Config, GravityConfig, ItemKind, LubeConfig, OxyConfig, StoreItem, ToiletConfig,
    WaterConfig,
};
pub use loader::{config_from_str, config_path, load_config, load_config_from_path};


#[cfg(test)]
mod tests {
    use super::{ItemKind, config_from_str, load_config};

    #[test]
    fn bundled_config_loads_and_has_a_store() {
        let config = load_config().expect("bundled cfg.json should load");

        assert!(!config.store.is_empty(), "catalog should not be empty");
        assert!(
            config
                .store
                .iter()
                .any(|item| item.kind == ItemKind::EndGame),
            "catalog should carry an end-game item"
        );
        assert!(config.lube.max_tier > 0);
        assert!(config.gravity.threshold > 0.0 && config.gravity.threshold < 1.0);
    }

    #[test]
    fn missing_top_level_key_fails_the_load() {
        let raw = r#"{
            "lube": {"base": 0.9, "upgrade": 0.2, "maxTier": 3},
            "gravity": {"base": 0.08, "upgrade": 0.04, "threshold": 0.75, "maxTier": 3},
            "oxy": {"regen": 0.12, "drain": 0.24, "min": 0.3},
            "store": []
        }"#;
        assert!(config_from_str(raw).is_err(), "missing `toilet` must fail");
    }

    #[test]
    fn mistyped_field_fails_the_load() {
        let raw = r#"{
            "lube": {"base": "fast", "upgrade": 0.2, "maxTier": 3},
            "gravity": {"base": 0.08, "upgrade": 0.04, "threshold": 0.75, "maxTier": 3},
            "oxy": {"regen": 0.12, "drain": 0.24, "min": 0.3},
            "store": [],
            "toilet": {"xPos": 0.375, "yPos": 0.56, "size": 0.25},
            "brick": {"xPos": 0.5, "startY": 0.2, "endY": 0.62, "fallSpeed": 0.45, "size": 0.08},
            "water": {"minX": 0.42, "maxX": 0.44, "minY": 0.72, "maxY": 0.745,
                      "width": 0.16, "height": 0.25,
                      "scissorX": 0.42, "scissorY": 0.66, "scissorW": 0.16, "scissorH": 0.12}
        }"#;
        assert!(config_from_str(raw).is_err(), "string `base` must fail");
    }
}
