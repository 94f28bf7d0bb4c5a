use bevy::prelude::*;
use click_games::quiz::{layout, QuizPlugin};

fn main() {
    App::new()
        .insert_resource(ClearColor(Color::srgb(0.07, 0.07, 0.12)))
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Quiz Game".into(),
                resolution: (layout::WINDOW_SIZE.x, layout::WINDOW_SIZE.y).into(),
                resizable: false,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(QuizPlugin)
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2dBundle::default());
}
