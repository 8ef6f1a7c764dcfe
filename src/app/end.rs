use bevy::prelude::*;
use bricked::{EndSequence, Savefile, rollover, unlocks_new_content};

use super::resources::{
    EndScene, EndState, PendingNotice, PlaySession, SaveSlot, ScreenLayout, SoundBank,
};
use super::state::AppPhase;

const CURTAIN_COLOR: Color = Color::srgb(0.05, 0.04, 0.06);
const CAPTION_COLOR: Color = Color::srgb(0.92, 0.88, 0.80);

pub fn enter_end(
    mut commands: Commands,
    play: Res<PlaySession>,
    slot: Res<SaveSlot>,
    sounds: Res<SoundBank>,
    layout: Res<ScreenLayout>,
) {
    // The rollover is committed before anything is shown; a crash during the
    // outro can only ever be replayed from the new prestige.
    let next_save = rollover(&play.session.save.data);
    let mut savefile = Savefile::new(next_save);
    savefile.mark_dirty();
    if let Err(err) = slot.store.persist(&mut savefile) {
        warn!("rollover save write failed: {err:#}");
    }
    info!("prestige rollover: now at prestige {}", next_save.prestige);

    commands.insert_resource(EndState {
        sequence: EndSequence::new(),
        next_save,
    });

    commands.spawn((
        Name::new("EndCurtain"),
        EndScene,
        Sprite::from_color(CURTAIN_COLOR, layout.rect_size(1.0, 1.0)),
        Transform::from_xyz(0.0, 0.0, 30.0),
    ));
    commands.spawn((
        Name::new("EndCaption"),
        EndScene,
        Text2d::new("You walked away."),
        TextFont {
            font_size: 44.0,
            ..default()
        },
        TextColor(CAPTION_COLOR),
        Transform::from_xyz(0.0, 0.0, 31.0),
    ));
    commands.spawn((
        Name::new("EndJingle"),
        EndScene,
        AudioPlayer(sounds.jingle.clone()),
        PlaybackSettings::DESPAWN,
    ));
}

pub fn tick_end(
    time: Res<Time>,
    mut end: ResMut<EndState>,
    mut notice: ResMut<PendingNotice>,
    mut next_phase: ResMut<NextState<AppPhase>>,
) {
    if !end.sequence.tick(time.delta_secs()) {
        return;
    }
    if unlocks_new_content(&end.next_save) {
        notice.0 = Some("Something new has appeared in the store...".to_string());
    }
    next_phase.set(AppPhase::Boot);
}

pub fn exit_end(mut commands: Commands, scene: Query<Entity, With<EndScene>>) {
    for entity in &scene {
        commands.entity(entity).despawn_recursive();
    }
    commands.remove_resource::<EndState>();
}
