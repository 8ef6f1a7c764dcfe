pub mod codec;
mod file_store;
mod model;

pub use codec::{
    export_to_base64, import_from_base64, load_from_json_string, save_to_json_string,
};
pub use file_store::SaveStore;
pub use model::{SAVE_VERSION, SaveData, Savefile};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_round_trip_preserves_every_field() {
        let original = SaveData {
            version: SAVE_VERSION,
            score: 123,
            lube_tier: 2,
            gravity_tier: 1,
            oxy_tier: 1,
            prestige: 3,
        };

        let json = save_to_json_string(&original).unwrap();
        let restored = load_from_json_string(&json).unwrap();

        assert_eq!(restored, original);
    }

    #[test]
    fn v1_file_without_oxy_tier_loads_with_defaults() {
        // Shape written by builds before the oxy upgrade line existed.
        let raw = r#"{"version":1,"score":40,"lubeTier":2,"gravityTier":1,"prestige":0}"#;

        let restored = load_from_json_string(raw).unwrap();

        assert_eq!(restored.score, 40);
        assert_eq!(restored.lube_tier, 2);
        assert_eq!(restored.gravity_tier, 1);
        assert_eq!(restored.oxy_tier, 0);
        assert_eq!(restored.version, SAVE_VERSION, "load re-stamps the version");
    }

    #[test]
    fn empty_object_loads_as_a_fresh_save() {
        let restored = load_from_json_string("{}").unwrap();
        assert_eq!(restored, SaveData::default());
    }

    #[test]
    fn garbage_json_is_an_error() {
        assert!(load_from_json_string("not json at all").is_err());
    }

    #[test]
    fn base64_round_trip_matches_json_round_trip() {
        let original = SaveData {
            score: 7,
            gravity_tier: 3,
            ..SaveData::default()
        };

        let encoded = export_to_base64(&original).unwrap();
        assert!(!encoded.contains('{'), "export should not be raw JSON");

        let restored = import_from_base64(&format!("  {encoded}\n")).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn import_rejects_non_base64_payloads() {
        assert!(import_from_base64("%%%not-base64%%%").is_err());
    }

    #[test]
    fn store_persists_and_reloads_through_the_filesystem() {
        let dir = std::env::temp_dir().join(format!(
            "bricked-save-test-{}-{:?}",
            std::process::id(),
            std::thread::current().id()
        ));
        let store = SaveStore::new(dir.join("nested").join("progress.json"));
        assert!(!store.exists());

        let mut save = Savefile::new(SaveData {
            score: 99,
            lube_tier: 1,
            ..SaveData::default()
        });
        save.mark_dirty();

        store.persist(&mut save).unwrap();
        assert!(!save.dirty, "persist clears the dirty flag");
        assert!(store.exists());

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, save.data);

        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn loading_a_missing_file_is_an_error() {
        let store = SaveStore::new("/definitely/not/a/real/bricked/save.json");
        assert!(store.load().is_err());
    }
}
