use bevy::prelude::*;
use bricked::{SaveData, SaveStore, Savefile, Session};

use super::resources::{GameConfig, PlaySession, RuntimeConfig, SaveSlot, SoundBank};
use super::state::AppPhase;

pub fn bootstrap_session(
    mut commands: Commands,
    config: Res<GameConfig>,
    runtime: Res<RuntimeConfig>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    let store = SaveStore::new(&runtime.save_path);

    let data = if store.exists() {
        match store.load() {
            Ok(data) => data,
            Err(err) => {
                warn!("save load failed, starting fresh: {err:#}");
                SaveData::default()
            }
        }
    } else {
        SaveData::default()
    };

    info!(
        "session start: score {} lube {} gravity {} oxy {} prestige {} ({} catalog items)",
        data.score,
        data.lube_tier,
        data.gravity_tier,
        data.oxy_tier,
        data.prestige,
        config.0.store.len(),
    );

    commands.insert_resource(PlaySession {
        session: Session::new(config.0.clone(), Savefile::new(data)),
    });
    commands.insert_resource(SaveSlot {
        store,
        failed_write: None,
    });
    next_phase.set(AppPhase::InGame);
}

pub fn tick_session(time: Res<Time>, mut play: ResMut<PlaySession>) {
    play.session.tick(time.delta_secs());
}

/// Writes the save in the same frame that marked it dirty. A failed write is
/// logged and leaves the flag set; the attempt is not repeated until the
/// next mutation changes the data.
pub fn persist_dirty_save(mut slot: ResMut<SaveSlot>, mut play: ResMut<PlaySession>) {
    if !write_due(&play.session.save, slot.failed_write) {
        return;
    }
    if let Err(err) = slot.store.persist(&mut play.session.save) {
        warn!("save write failed: {err:#}");
        slot.failed_write = Some(play.session.save.data);
    } else {
        slot.failed_write = None;
    }
}

fn write_due(save: &Savefile, failed_write: Option<SaveData>) -> bool {
    save.dirty && failed_write != Some(save.data)
}

pub fn play_session_cues(
    mut commands: Commands,
    sounds: Res<SoundBank>,
    mut play: ResMut<PlaySession>,
) {
    for cue in play.session.take_cues() {
        commands.spawn((
            AudioPlayer(sounds.cue_handle(cue)),
            PlaybackSettings::DESPAWN,
        ));
    }
}
