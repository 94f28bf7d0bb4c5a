use bevy::prelude::*;
use click_games::rps::{layout, RpsPlugin};

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.09, 0.24, 0.35)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Rock Paper Scissors".into(),
                resolution: (layout::WINDOW_SIZE.x, layout::WINDOW_SIZE.y).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(RpsPlugin)
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
