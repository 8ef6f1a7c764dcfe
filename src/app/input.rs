use bevy::prelude::*;
use bricked::{DebugCommand, ItemKind, PressOutcome, apply_debug_command};

use super::resources::{GameConfig, PlaySession, PointerNorm, ScreenLayout};
use super::state::OverlayState;

pub fn refresh_layout(windows: Query<&Window>, mut layout: ResMut<ScreenLayout>) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    *layout = ScreenLayout::from_window_size(window.width(), window.height());
}

pub fn track_pointer(
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    layout: Res<ScreenLayout>,
    mut pointer: ResMut<PointerNorm>,
) {
    let Ok(window) = windows.get_single() else {
        pointer.0 = None;
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        pointer.0 = None;
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.get_single() else {
        pointer.0 = None;
        return;
    };

    let Ok(world) = camera.viewport_to_world_2d(camera_transform, cursor_position) else {
        pointer.0 = None;
        return;
    };

    pointer.0 = Some(layout.world_to_norm(world));
}

pub fn handle_play_input(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerNorm>,
    mut play: ResMut<PlaySession>,
    mut next_overlay: ResMut<NextState<OverlayState>>,
) {
    let Some(position) = pointer.0 else {
        play.session.hovering_store_icon = false;
        return;
    };

    play.session.pointer_moved(position);

    if buttons.just_pressed(MouseButton::Left)
        && play.session.press(position) == PressOutcome::OpenStore
    {
        next_overlay.set(OverlayState::Store);
    }
}

pub fn handle_debug_keys(
    keys: Res<ButtonInput<KeyCode>>,
    config: Res<GameConfig>,
    mut play: ResMut<PlaySession>,
) {
    let command = if keys.just_pressed(KeyCode::F5) {
        // Force a write this frame; the persist system picks the flag up.
        play.session.save.mark_dirty();
        return;
    } else if keys.just_pressed(KeyCode::F6) {
        DebugCommand::SetScore(play.session.save.data.score + 25)
    } else if keys.just_pressed(KeyCode::F7) {
        DebugCommand::SetLubeTier(config.0.lube.max_tier)
    } else if keys.just_pressed(KeyCode::F8) {
        DebugCommand::SetGravityTier(config.0.gravity.max_tier)
    } else if keys.just_pressed(KeyCode::F10) {
        DebugCommand::SetOxyTier(catalog_oxy_tier(&config))
    } else if keys.just_pressed(KeyCode::F9) {
        DebugCommand::Reset
    } else {
        return;
    };

    if let Err(err) = apply_debug_command(command, &config.0, &mut play.session.save) {
        warn!("debug command {command:?} rejected: {err:?}");
    }
}

fn catalog_oxy_tier(config: &GameConfig) -> i16 {
    config
        .0
        .store
        .iter()
        .filter_map(|item| match item.kind {
            ItemKind::Oxy { tier } => Some(tier),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}
