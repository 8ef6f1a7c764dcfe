mod end;
mod input;
mod resources;
mod simulation;
mod state;
mod store_ui;
mod view;

use bevy::prelude::*;

pub use resources::GameConfig;
use resources::{PendingNotice, PointerNorm, RuntimeConfig, ScreenLayout};
use state::{AppPhase, OverlayState};

pub struct BrickedAppPlugin;

impl Plugin for BrickedAppPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppPhase>()
            .init_state::<OverlayState>()
            .init_resource::<RuntimeConfig>()
            .init_resource::<PointerNorm>()
            .init_resource::<PendingNotice>()
            .init_resource::<ScreenLayout>()
            .add_systems(Startup, (view::spawn_camera, view::load_sound_bank))
            .add_systems(OnEnter(AppPhase::Boot), simulation::bootstrap_session)
            .add_systems(OnEnter(AppPhase::InGame), view::spawn_scene)
            .add_systems(OnExit(AppPhase::InGame), view::despawn_scene)
            .add_systems(OnEnter(OverlayState::Store), store_ui::open_store)
            .add_systems(OnExit(OverlayState::Store), store_ui::close_store)
            .add_systems(OnEnter(AppPhase::End), end::enter_end)
            .add_systems(OnExit(AppPhase::End), end::exit_end)
            .add_systems(
                Update,
                (
                    input::refresh_layout,
                    input::track_pointer,
                    input::handle_play_input.run_if(in_state(OverlayState::Closed)),
                    input::handle_debug_keys,
                    (store_ui::handle_store_input, store_ui::tick_store)
                        .chain()
                        .run_if(in_state(OverlayState::Store)),
                    // The session keeps ticking while the store is open.
                    simulation::tick_session,
                    simulation::persist_dirty_save,
                    simulation::play_session_cues,
                    view::refresh_scene,
                    store_ui::refresh_store.run_if(in_state(OverlayState::Store)),
                    view::tick_notice,
                )
                    .chain()
                    .run_if(in_state(AppPhase::InGame)),
            )
            .add_systems(Update, end::tick_end.run_if(in_state(AppPhase::End)));
    }
}
