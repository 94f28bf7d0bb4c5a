//! Multiple-choice quiz fed by a local bank or the OpenTDB API.
//! - `question` / `session`: records and the answer/advance pager.
//! - `source`: remote provider seam and the OpenTDB client.
//! - `flow`: source choice, running session and final screen.
//! - `input` / `ui`: bevy systems for clicks, the fetch task and drawing.

pub mod flow;
pub mod input;
pub mod layout;
pub mod question;
pub mod session;
pub mod source;
pub mod ui;

use std::sync::Arc;

use bevy::prelude::*;

pub use flow::{ClickEffect, QuizFlow, QuizScreen, QuizSettings};
pub use input::QuestionProvider;
pub use question::{local_questions, reindex_after_shuffle, QuestionRecord};
pub use session::{Phase, QuizSession, SelectOutcome};
pub use source::{OpenTdb, RemoteQuestions, TriviaResponse};

pub struct QuizPlugin;
impl Plugin for QuizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<QuizSettings>().init_resource::<QuizFlow>();

        if !app.world().contains_resource::<QuestionProvider>() {
            let settings = app.world().resource::<QuizSettings>().clone();
            app.insert_resource(QuestionProvider(Arc::new(OpenTdb {
                base_url: settings.api_url,
                timeout: settings.timeout,
            })));
        }

        app.init_state::<QuizScreen>()
            .add_plugins((input::InputPlugin, ui::UiPlugin));
    }
}
