use crate::data::Config;
use crate::save::Savefile;

use super::{Point, SoundCue};

pub const EFFORT_DECAY: f32 = 0.3;
pub const EFFORT_INCREMENT: f32 = 0.1;
pub const MAX_EFFORT: f32 = 1.0;
pub const PROGRESS_SCALAR: f32 = 0.5;
pub const COOLDOWN_VALUE: f32 = 3.0;
pub const FADE_IN_TIME: f32 = 1.0;
pub const BRICK_FALL_END_Y: f32 = 1.0;

pub const STORE_ICON_X: f32 = 0.7;
pub const STORE_ICON_Y: f32 = 0.075;
pub const STORE_ICON_W: f32 = 0.05;
pub const STORE_ICON_H: f32 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    OpenStore,
    Strained,
    Ignored,
}

/// The frame-stepped play state machine: effort, oxygen, progress, cooldown
/// and the brick-fall cycle, advanced once per frame by `tick`.
///
/// Persistence stays outside: mutations only raise `save.dirty`, the shell
/// writes the file.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub config: Config,
    pub save: Savefile,
    pub effort: f32,
    pub oxy: f32,
    pub out_of_breath: bool,
    pub progress: f32,
    pub cooldown: f32,
    pub brick_fall: f32,
    pub timer: f32,
    pub water_x: f32,
    pub water_y: f32,
    pub hovering_store_icon: bool,
    gravity: f32,
    progress_decay: f32,
    splash_armed: bool,
    cues: Vec<SoundCue>,
}

impl Session {
    pub fn new(config: Config, save: Savefile) -> Self {
        let mut session = Self {
            config,
            save,
            effort: 0.0,
            oxy: 1.0,
            out_of_breath: false,
            progress: 0.0,
            cooldown: 0.0,
            brick_fall: -1.0,
            timer: 0.0,
            water_x: 0.0,
            water_y: 0.0,
            hovering_store_icon: false,
            gravity: 0.0,
            progress_decay: 0.0,
            splash_armed: true,
            cues: Vec::new(),
        };
        session.recalculate_progress_decay();
        session.recalculate_gravity();
        session
    }

    pub fn fading_in(&self) -> bool {
        self.timer < FADE_IN_TIME
    }

    pub fn fade_alpha(&self) -> f32 {
        if self.fading_in() {
            1.0 - self.timer / FADE_IN_TIME
        } else {
            0.0
        }
    }

    pub fn vignette_alpha(&self) -> f32 {
        self.effort.max(1.0 - self.oxy)
    }

    pub fn brick_visible(&self) -> bool {
        self.cooldown <= 0.0 || self.brick_fall >= 0.0
    }

    /// Brick vertical position: tracks progress while charging, the fall
    /// parameter once the drop has started.
    pub fn brick_y(&self) -> f32 {
        let brick = &self.config.brick;
        if self.brick_fall >= 0.0 {
            brick.end_y + self.brick_fall * (BRICK_FALL_END_Y - brick.end_y)
        } else {
            brick.start_y + self.progress * (brick.end_y - brick.start_y)
        }
    }

    pub fn take_cues(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.cues)
    }

    pub fn pointer_moved(&mut self, pos: Point) {
        if self.fading_in() {
            return;
        }
        self.hovering_store_icon = pos.x > STORE_ICON_X
            && pos.x < STORE_ICON_X + STORE_ICON_W
            && pos.y > STORE_ICON_Y
            && pos.y < STORE_ICON_Y + STORE_ICON_H;
    }

    pub fn press(&mut self, pos: Point) -> PressOutcome {
        if self.fading_in() {
            return PressOutcome::Ignored;
        }
        self.pointer_moved(pos);
        if self.hovering_store_icon {
            return PressOutcome::OpenStore;
        }
        if !self.out_of_breath
            && self.cooldown <= 0.0
            && self.effort < MAX_EFFORT
            && self.oxy >= self.config.oxy.min
        {
            self.effort = (self.effort + EFFORT_INCREMENT).min(MAX_EFFORT);
            return PressOutcome::Strained;
        }
        PressOutcome::Ignored
    }

    pub fn tick(&mut self, delta: f32) {
        self.timer += delta;

        let water = &self.config.water;
        self.water_x = water.min_x
            - (0.5 * (1.0 + 1.2 * self.timer).sin() + 1.0) * (water.max_x - water.min_x);
        self.water_y =
            water.min_y + (0.5 * self.timer.sin() + 1.0) * (water.max_y - water.min_y);

        // Gameplay is suspended until the fade-in has finished.
        if self.timer < FADE_IN_TIME {
            return;
        }

        self.advance_effort(delta);
        self.advance_oxy(delta);
        self.advance_progress(delta);
        self.advance_brick_fall(delta);
    }

    fn advance_effort(&mut self, delta: f32) {
        if self.effort <= 0.0 {
            return;
        }
        self.effort -= EFFORT_DECAY * delta;
        if self.out_of_breath || self.cooldown > 0.0 {
            self.effort -= delta;
        }
        if self.effort < 0.0 {
            self.effort = 0.0;
        }
    }

    fn advance_oxy(&mut self, delta: f32) {
        if self.oxy < 1.0 {
            self.oxy = (self.oxy + self.config.oxy.regen * delta).min(1.0);
        } else {
            self.out_of_breath = false;
        }

        self.oxy -= self.effort * self.config.oxy.drain * delta;
        if self.oxy <= 0.0 {
            if !self.out_of_breath {
                self.cues.push(SoundCue::Breath);
            }
            self.out_of_breath = true;
            self.oxy = 0.0;
        }
    }

    fn advance_progress(&mut self, delta: f32) {
        if self.progress < 1.0 {
            self.progress += self.effort * PROGRESS_SCALAR * delta;
            if self.progress >= self.config.gravity.threshold {
                self.progress += self.gravity * delta;
            }
            if self.progress >= 1.0 {
                self.progress = 1.0;
                self.cooldown = COOLDOWN_VALUE;
                self.brick_fall = 0.0;
                self.cues.push(SoundCue::Pop);
                self.save.data.score += 1;
                self.save.dirty = true;
            } else if self.progress > 0.0 {
                self.progress -= self.progress_decay * delta;
                if self.progress < 0.0 {
                    self.progress = 0.0;
                }
            }
        } else if self.cooldown > 0.0 {
            self.cooldown = (self.cooldown - delta).max(0.0);
        } else {
            self.progress = 0.0;
            self.cooldown = 0.0;
            self.brick_fall = -1.0;
            // Upgrades bought mid-cycle take effect here, on the next cycle.
            self.recalculate_progress_decay();
            self.recalculate_gravity();
            self.splash_armed = true;
        }
    }

    fn advance_brick_fall(&mut self, delta: f32) {
        if self.brick_fall < 0.0 {
            return;
        }
        self.brick_fall += self.config.brick.fall_speed * delta;
        if self.brick_fall >= self.water_y && self.splash_armed {
            self.cues.push(SoundCue::Splash);
            self.splash_armed = false;
        }
    }

    fn recalculate_progress_decay(&mut self) {
        self.progress_decay = self.config.lube.decay_for_tier(self.save.data.lube_tier);
    }

    fn recalculate_gravity(&mut self) {
        self.gravity = self.config.gravity.pull_for_tier(self.save.data.gravity_tier);
    }
}
