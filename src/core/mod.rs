mod debug;
mod end;
mod session;
mod store;

pub use debug::{DebugCommand, DebugError, apply as apply_debug_command};
pub use end::{END_COUNTDOWN, EndSequence, rollover, unlocks_new_content};
pub use session::{
    COOLDOWN_VALUE, EFFORT_DECAY, EFFORT_INCREMENT, FADE_IN_TIME, MAX_EFFORT, PROGRESS_SCALAR,
    PressOutcome, STORE_ICON_H, STORE_ICON_W, STORE_ICON_X, STORE_ICON_Y, Session,
};
pub use store::{
    FLOAT_DISTANCE, FLOAT_LIFETIME, Feedback, FeedbackFloat, ITEM_AREA_H, ITEM_AREA_W,
    ITEM_AREA_X, ITEM_AREA_Y, ITEM_H, PAD, SCROLL_SCALAR, StoreEvent, StoreOverlay, TITLE_TEXT_H,
    WINDOW_H, WINDOW_W, WINDOW_X, WINDOW_Y, has_item, max_scroll, visible_items,
};

/// Position in the normalized render space: both axes in `[0, 1]`, y down.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// One-shot audio requests emitted by the game logic and played by the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Breath,
    Pop,
    Splash,
    Buy,
    Broke,
}
