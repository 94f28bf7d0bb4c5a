//! Rock-Paper-Scissors against a random computer opponent.
//! - `round`: choices, the dominance rule and score counters.
//! - `game`: per-click round play and the computer's RNG.
//! - `input` / `ui`: bevy systems for mouse clicks and drawing.

pub mod game;
pub mod input;
pub mod layout;
pub mod round;
pub mod ui;

use bevy::prelude::*;

pub use game::{ComputerRng, RpsGame, RpsSettings};
pub use round::{evaluate, Choice, Round, RoundResult, Scoreboard};

pub struct RpsPlugin;
impl Plugin for RpsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RpsSettings>()
            .init_resource::<RpsGame>()
            .add_systems(PreStartup, seed_computer)
            .add_plugins((input::InputPlugin, ui::UiPlugin));
    }
}

fn seed_computer(mut commands: Commands, settings: Res<RpsSettings>) {
    if let Some(seed) = settings.seed {
        debug!("computer picks seeded with {seed}");
    }
    commands.insert_resource(ComputerRng::from_settings(&settings));
}
