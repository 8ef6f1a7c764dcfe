use bevy::prelude::*;
use bevy::window::{PresentMode, Window};

mod app;

fn main() {
    // Structural config problems are unrecoverable; fail before the window
    // opens so the error is actually readable.
    let config = match bricked::load_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("bricked: {err:#}");
            std::process::exit(1);
        }
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.02, 0.02, 0.03)))
        .insert_resource(app::GameConfig(config))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Bricked".to_string(),
                resolution: (960.0, 960.0).into(),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(app::BrickedAppPlugin)
        .run();
}
