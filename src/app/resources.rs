use std::path::PathBuf;

use bevy::prelude::*;
use bricked::{Config, EndSequence, Point, SaveData, SaveStore, Session, SoundCue, StoreOverlay};

/// Tunables loaded from `assets/cfg.json` before the app starts.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig(pub Config);

#[derive(Resource, Debug, Clone)]
pub struct RuntimeConfig {
    pub save_path: PathBuf,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from("saves/progress.json"),
        }
    }
}

#[derive(Resource, Debug)]
pub struct PlaySession {
    pub session: Session,
}

#[derive(Resource, Debug)]
pub struct SaveSlot {
    pub store: SaveStore,
    /// Snapshot of the save state whose write failed. The dirty flag stays
    /// set, but the same state is not retried; the next mutation changes the
    /// data and makes the write due again.
    pub failed_write: Option<SaveData>,
}

/// Present only while the store overlay is open.
#[derive(Resource, Debug, Default)]
pub struct ActiveStore {
    pub overlay: StoreOverlay,
}

/// Countdown plus the rolled-over save it will hand to the next session.
#[derive(Resource, Debug)]
pub struct EndState {
    pub sequence: EndSequence,
    pub next_save: SaveData,
}

/// Cursor position mapped into the normalized game space, when over the
/// window at all.
#[derive(Resource, Debug, Default)]
pub struct PointerNorm(pub Option<Point>);

/// One-shot banner text carried across the Boot re-entry after an end
/// transition.
#[derive(Resource, Debug, Default)]
pub struct PendingNotice(pub Option<String>);

/// Maps the normalized [0,1]x[0,1] space (y down) onto a centered square in
/// world units, recomputed from the window every frame. Both rendering and
/// cursor hit-testing go through this, so they can never disagree.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ScreenLayout {
    pub origin: Vec2,
    pub side: f32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self::from_window_size(1.0, 1.0)
    }
}

impl ScreenLayout {
    pub fn from_window_size(width: f32, height: f32) -> Self {
        let side = width.min(height);
        Self {
            // World position of normalized (0,0), the top-left corner.
            origin: Vec2::new(-side * 0.5, side * 0.5),
            side,
        }
    }

    pub fn norm_to_world(&self, point: Point) -> Vec2 {
        Vec2::new(
            self.origin.x + point.x * self.side,
            self.origin.y - point.y * self.side,
        )
    }

    pub fn world_to_norm(&self, world: Vec2) -> Point {
        Point::new(
            (world.x - self.origin.x) / self.side,
            (self.origin.y - world.y) / self.side,
        )
    }

    pub fn len(&self, fraction: f32) -> f32 {
        fraction * self.side
    }

    /// World center of a normalized rect given by its top-left corner.
    pub fn rect_center(&self, x: f32, y: f32, w: f32, h: f32) -> Vec2 {
        self.norm_to_world(Point::new(x + w * 0.5, y + h * 0.5))
    }

    pub fn rect_size(&self, w: f32, h: f32) -> Vec2 {
        Vec2::new(self.len(w), self.len(h))
    }
}

#[derive(Resource, Debug)]
pub struct SoundBank {
    pub breath: Handle<AudioSource>,
    pub pop: Handle<AudioSource>,
    pub splash: Handle<AudioSource>,
    pub buy: Handle<AudioSource>,
    pub broke: Handle<AudioSource>,
    pub jingle: Handle<AudioSource>,
}

impl SoundBank {
    pub fn cue_handle(&self, cue: SoundCue) -> Handle<AudioSource> {
        match cue {
            SoundCue::Breath => self.breath.clone(),
            SoundCue::Pop => self.pop.clone(),
            SoundCue::Splash => self.splash.clone(),
            SoundCue::Buy => self.buy.clone(),
            SoundCue::Broke => self.broke.clone(),
        }
    }
}

/// Which piece of the play scene a sprite entity draws; `refresh_scene`
/// drives position, size, color and visibility from the session each frame.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneSprite {
    Background,
    Toilet,
    Water,
    Brick,
    EffortFrame,
    EffortFill,
    OxyFrame,
    OxyFill,
    StoreIcon,
    Vignette,
    FadeCurtain,
}

#[derive(Component)]
pub struct ScoreText;

#[derive(Component)]
pub struct NoticeBanner {
    pub remaining: f32,
}

/// Marker on every entity the store overlay owns.
#[derive(Component)]
pub struct StoreUi;

/// Which piece of the store overlay an entity draws, mirroring the
/// normalized geometry the hit-testing uses.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreUiPart {
    Window,
    Title,
    RowBack(usize),
    RowLabel(usize),
    FeedbackFloat,
}

#[derive(Component)]
pub struct EndScene;
