use bevy::prelude::*;
use bevy_egui::egui::{Align2, Color32};
use bevy_egui::{EguiContexts, EguiPlugin};

use super::game::RpsGame;
use super::layout;
use super::round::Choice;
use crate::paint;

const BACKDROP: Color32 = Color32::from_rgb(24, 60, 90);
const CARD: Color32 = Color32::from_rgb(40, 40, 60);
const RESULT_YELLOW: Color32 = Color32::from_rgb(255, 255, 0);

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(Update, draw_table);
    }
}

fn draw_table(mut contexts: EguiContexts, game: Res<RpsGame>) {
    let painter = paint::background(contexts.ctx_mut());
    paint::fill(&painter, layout::WINDOW_SIZE, BACKDROP);

    for choice in Choice::ALL {
        paint::button(
            &painter,
            layout::button_for(choice),
            choice.label(),
            40.0,
            paint::BUTTON_GREY,
        );
    }

    if let Some(round) = game.last_round {
        for (region, choice) in [
            (layout::PLAYER_CARD, round.player),
            (layout::COMPUTER_CARD, round.computer),
        ] {
            paint::button(&painter, region, choice.label(), 48.0, CARD);
        }
        paint::text(
            &painter,
            layout::RESULT_POS,
            Align2::CENTER_CENTER,
            round.result().banner(),
            60.0,
            RESULT_YELLOW,
        );
    }

    let board = game.scoreboard;
    paint::text(
        &painter,
        layout::PLAYER_SCORE_POS,
        Align2::LEFT_TOP,
        &format!("Player: {}", board.player),
        48.0,
        paint::WHITE,
    );
    paint::text(
        &painter,
        layout::COMPUTER_SCORE_POS,
        Align2::LEFT_TOP,
        &format!("Computer: {}", board.computer),
        48.0,
        paint::WHITE,
    );
}
