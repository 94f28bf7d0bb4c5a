use bevy::input::mouse::MouseButtonInput;
use bevy::input::ButtonState;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::game::{ComputerRng, RpsGame};

pub struct InputPlugin;
impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, play_on_click);
    }
}

fn play_on_click(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut mousebtn_evr: EventReader<MouseButtonInput>,
    mut game: ResMut<RpsGame>,
    mut rng: ResMut<ComputerRng>,
) {
    let Ok(win) = windows.get_single() else {
        return;
    };

    for ev in mousebtn_evr.read() {
        if ev.state != ButtonState::Pressed || ev.button != MouseButton::Left {
            continue;
        }
        let Some(cursor) = win.cursor_position() else {
            continue;
        };
        if game.handle_click(cursor, &mut rng.0).is_none() {
            debug!("click at {cursor} missed every button");
        }
    }
}
