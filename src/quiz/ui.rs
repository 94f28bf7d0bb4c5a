use bevy::prelude::*;
use bevy_egui::egui::{Align2, Color32};
use bevy_egui::{EguiContexts, EguiPlugin};

use super::flow::{QuizFlow, QuizScreen};
use super::layout;
use super::session::Phase;
use crate::paint;

const STARTUP_BG: Color32 = Color32::from_rgb(18, 18, 30);
const QUESTION_BG: Color32 = Color32::from_rgb(30, 30, 40);
const FINAL_BG: Color32 = Color32::from_rgb(15, 15, 30);
const API_BLUE: Color32 = Color32::from_rgb(40, 100, 200);
const LOCAL_GREY: Color32 = Color32::from_rgb(80, 80, 80);
const ERROR_RED: Color32 = Color32::from_rgb(240, 100, 100);
const PROMPT_GREY: Color32 = Color32::from_rgb(220, 220, 220);
const HINT_GREY: Color32 = Color32::from_rgb(180, 180, 180);
const RIGHT_TEXT: Color32 = Color32::from_rgb(200, 230, 200);
const WRONG_TEXT: Color32 = Color32::from_rgb(250, 200, 200);

const FONT_Q: f32 = 30.0;
const FONT_OPT: f32 = 24.0;
const FONT_SMALL: f32 = 17.0;

pub struct UiPlugin;
impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(EguiPlugin)
            .add_systems(
                Update,
                draw_source_select.run_if(in_state(QuizScreen::SourceSelect)),
            )
            .add_systems(Update, draw_question.run_if(in_state(QuizScreen::Question)))
            .add_systems(Update, draw_final.run_if(in_state(QuizScreen::Final)));
    }
}

fn draw_source_select(mut contexts: EguiContexts, flow: Res<QuizFlow>) {
    let painter = paint::background(contexts.ctx_mut());
    paint::fill(&painter, layout::WINDOW_SIZE, STARTUP_BG);

    paint::text(
        &painter,
        layout::TITLE_POS,
        Align2::CENTER_CENTER,
        "Choose question source",
        FONT_Q,
        paint::WHITE,
    );
    paint::button(&painter, layout::API_BUTTON, "Use API", FONT_OPT, API_BLUE);
    paint::button(&painter, layout::LOCAL_BUTTON, "Use Local", FONT_OPT, LOCAL_GREY);

    if flow.is_fetching() {
        paint::text(
            &painter,
            layout::FETCH_ERROR_POS,
            Align2::CENTER_CENTER,
            "Fetching questions...",
            FONT_SMALL,
            HINT_GREY,
        );
    } else if let Some(err) = flow.fetch_error() {
        paint::text(
            &painter,
            layout::FETCH_ERROR_POS,
            Align2::CENTER_CENTER,
            err,
            FONT_SMALL,
            ERROR_RED,
        );
    }
}

fn draw_question(mut contexts: EguiContexts, flow: Res<QuizFlow>) {
    let Some(session) = flow.session() else {
        return;
    };
    let Some(question) = session.current_question() else {
        return;
    };

    let painter = paint::background(contexts.ctx_mut());
    paint::fill(&painter, layout::WINDOW_SIZE, QUESTION_BG);

    paint::text(
        &painter,
        layout::HEADER_POS,
        Align2::LEFT_TOP,
        &format!("Question {} / {}", session.cursor() + 1, session.len()),
        FONT_Q,
        paint::WHITE,
    );
    paint::text(
        &painter,
        layout::SCORE_POS,
        Align2::LEFT_TOP,
        &format!("Score: {}", session.score()),
        FONT_SMALL,
        paint::WHITE,
    );
    paint::wrapped_text(
        &painter,
        layout::PROMPT_POS,
        question.prompt(),
        FONT_Q,
        PROMPT_GREY,
        layout::PROMPT_WIDTH,
    );

    let answered = session.phase() == Phase::Answered;
    for (i, option) in question.options().iter().enumerate() {
        let bg = if !answered {
            paint::BUTTON_GREY
        } else if i == question.correct_index() {
            paint::CORRECT_GREEN
        } else if session.selected() == Some(i) {
            paint::WRONG_RED
        } else {
            paint::BUTTON_GREY
        };
        paint::button(&painter, layout::option_button(i), option, FONT_OPT, bg);
    }

    if let Some(correct) = session.answered_correctly() {
        let (feedback, color) = if correct {
            ("Correct!".to_string(), RIGHT_TEXT)
        } else {
            (
                format!("Wrong! Answer: {}", question.correct_option()),
                WRONG_TEXT,
            )
        };
        paint::text(
            &painter,
            layout::FEEDBACK_POS,
            Align2::CENTER_CENTER,
            &feedback,
            FONT_Q,
            color,
        );
        paint::button(
            &painter,
            layout::NEXT_BUTTON,
            "Next",
            FONT_SMALL,
            paint::CORRECT_GREEN,
        );
    }
}

fn draw_final(mut contexts: EguiContexts, flow: Res<QuizFlow>) {
    let Some(session) = flow.session() else {
        return;
    };
    let painter = paint::background(contexts.ctx_mut());
    paint::fill(&painter, layout::WINDOW_SIZE, FINAL_BG);

    paint::text(
        &painter,
        layout::FINAL_SCORE_POS,
        Align2::CENTER_CENTER,
        &format!("Final Score: {} / {}", session.score(), session.len()),
        FONT_Q,
        paint::WHITE,
    );
    paint::text(
        &painter,
        layout::FINAL_HINT_POS,
        Align2::CENTER_CENTER,
        "Click anywhere or close window to quit",
        FONT_SMALL,
        HINT_GREY,
    );
}
