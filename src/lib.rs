pub mod core;
pub mod data;
pub mod save;

pub use self::core::{
    DebugCommand, DebugError, EndSequence, Feedback, FeedbackFloat, Point, PressOutcome, Session,
    SoundCue, StoreEvent, StoreOverlay, apply_debug_command, has_item, max_scroll, rollover,
    unlocks_new_content, visible_items,
};
pub use data::{
    BrickConfig, Config, GravityConfig, ItemKind, LubeConfig, OxyConfig, StoreItem, ToiletConfig,
    WaterConfig, config_from_str, config_path, load_config, load_config_from_path,
};
pub use save::{
    SAVE_VERSION, SaveData, SaveStore, Savefile, export_to_base64, import_from_base64,
    load_from_json_string, save_to_json_string,
};
