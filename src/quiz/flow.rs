use std::time::Duration;

use bevy::prelude::*;

use super::layout;
use super::question::{local_questions, QuestionRecord};
use super::session::{Phase, QuizSession};
use super::source::OPENTDB_URL;
use crate::error::{FetchError, QuizError};

#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QuizScreen {
    #[default]
    SourceSelect,
    Question,
    Final,
}

#[derive(Resource, Clone, Debug)]
pub struct QuizSettings {
    pub api_url: String,
    pub amount: usize,
    pub timeout: Duration,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            api_url: OPENTDB_URL.to_string(),
            amount: 5,
            timeout: Duration::from_secs(6),
        }
    }
}

/// What the app shell must do after a click was routed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickEffect {
    None,
    StartFetch,
    Exit,
}

/// Screen-level quiz state: the source picker, the running session and the
/// final score all hang off this one resource.
#[derive(Resource, Default, Debug)]
pub struct QuizFlow {
    session: Option<QuizSession>,
    fetch_error: Option<String>,
    fetching: bool,
}

impl QuizFlow {
    pub fn screen(&self) -> QuizScreen {
        match &self.session {
            None => QuizScreen::SourceSelect,
            Some(s) if s.is_finished() => QuizScreen::Final,
            Some(_) => QuizScreen::Question,
        }
    }

    pub fn session(&self) -> Option<&QuizSession> {
        self.session.as_ref()
    }

    pub fn fetch_error(&self) -> Option<&str> {
        self.fetch_error.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetching
    }

    fn start(&mut self, questions: Vec<QuestionRecord>) -> Result<(), QuizError> {
        let session = QuizSession::new(questions)?;
        info!("quiz started with {} questions", session.len());
        self.session = Some(session);
        self.fetch_error = None;
        Ok(())
    }

    /// Ignored while a fetch is pending so a late result cannot clobber it.
    pub fn start_local(&mut self) -> Result<(), QuizError> {
        if self.fetching {
            debug!("local source ignored, fetch still pending");
            return Ok(());
        }
        self.start(local_questions())
    }

    pub fn begin_fetch(&mut self) -> bool {
        if self.fetching || self.session.is_some() {
            return false;
        }
        self.fetching = true;
        self.fetch_error = None;
        true
    }

    pub fn complete_fetch(&mut self, result: Result<Vec<QuestionRecord>, FetchError>) {
        self.fetching = false;
        let outcome = result
            .map_err(QuizError::from)
            .and_then(|questions| self.start(questions));
        if let Err(e) = outcome {
            warn!("Failed fetching questions: {e}");
            let reason = match e {
                QuizError::Fetch(f) => f.to_string(),
                QuizError::InvalidInput(i) => i.to_string(),
            };
            self.fetch_error = Some(format!("Failed to fetch from API: {reason}"));
        }
    }

    pub fn handle_click(&mut self, p: Vec2) -> ClickEffect {
        match self.screen() {
            QuizScreen::SourceSelect => {
                if layout::API_BUTTON.contains(p) {
                    if self.begin_fetch() {
                        return ClickEffect::StartFetch;
                    }
                } else if layout::LOCAL_BUTTON.contains(p) {
                    if let Err(e) = self.start_local() {
                        warn!("local questions unusable: {e}");
                    }
                }
                ClickEffect::None
            }
            QuizScreen::Question => {
                if let Some(session) = self.session.as_mut() {
                    click_question(session, p);
                }
                ClickEffect::None
            }
            QuizScreen::Final => ClickEffect::Exit,
        }
    }
}

fn click_question(session: &mut QuizSession, p: Vec2) {
    match session.phase() {
        Phase::AwaitingSelection => {
            let count = session
                .current_question()
                .map_or(0, |q| q.options().len());
            if let Some(i) = layout::option_at(p, count) {
                if let Err(e) = session.select_option(i) {
                    warn!("selection rejected: {e}");
                }
            }
        }
        Phase::Answered => {
            if layout::NEXT_BUTTON.contains(p) {
                if let Err(e) = session.advance() {
                    warn!("advance rejected: {e}");
                }
            }
        }
        Phase::Finished => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_source_select() {
        let flow = QuizFlow::default();
        assert_eq!(flow.screen(), QuizScreen::SourceSelect);
        assert!(flow.session().is_none());
    }

    #[test]
    fn local_button_starts_session() {
        let mut flow = QuizFlow::default();
        let effect = flow.handle_click(layout::LOCAL_BUTTON.center());
        assert_eq!(effect, ClickEffect::None);
        assert_eq!(flow.screen(), QuizScreen::Question);
        assert_eq!(flow.session().map(|s| s.len()), Some(3));
    }

    #[test]
    fn api_button_requests_a_single_fetch() {
        let mut flow = QuizFlow::default();
        assert_eq!(
            flow.handle_click(layout::API_BUTTON.center()),
            ClickEffect::StartFetch
        );
        assert!(flow.is_fetching());
        assert_eq!(
            flow.handle_click(layout::API_BUTTON.center()),
            ClickEffect::None
        );
    }

    #[test]
    fn local_ignored_while_fetching() {
        let mut flow = QuizFlow::default();
        assert!(flow.begin_fetch());
        flow.handle_click(layout::LOCAL_BUTTON.center());
        assert!(flow.session().is_none());
    }

    #[test]
    fn empty_fetch_result_surfaces_as_error() {
        let mut flow = QuizFlow::default();
        assert!(flow.begin_fetch());
        flow.complete_fetch(Ok(Vec::new()));
        assert!(flow.session().is_none());
        assert!(!flow.is_fetching());
        assert_eq!(
            flow.fetch_error(),
            Some("Failed to fetch from API: question list is empty")
        );
    }

    #[test]
    fn stray_clicks_do_nothing() {
        let mut flow = QuizFlow::default();
        flow.handle_click(Vec2::new(5.0, 5.0));
        assert_eq!(flow.screen(), QuizScreen::SourceSelect);

        flow.start_local().unwrap();
        flow.handle_click(Vec2::new(5.0, 5.0));
        let s = flow.session().unwrap();
        assert_eq!(s.phase(), Phase::AwaitingSelection);

        // Next is not live before an answer.
        flow.handle_click(layout::NEXT_BUTTON.center());
        assert_eq!(flow.session().unwrap().cursor(), 0);
    }

    #[test]
    fn click_through_to_final_then_exit() {
        let mut flow = QuizFlow::default();
        flow.start_local().unwrap();
        for _ in 0..3 {
            flow.handle_click(layout::option_button(0).center());
            assert_eq!(flow.session().unwrap().phase(), Phase::Answered);
            flow.handle_click(layout::NEXT_BUTTON.center());
        }
        assert_eq!(flow.screen(), QuizScreen::Final);
        assert_eq!(flow.session().unwrap().score(), 0);
        assert_eq!(
            flow.handle_click(Vec2::new(1.0, 1.0)),
            ClickEffect::Exit
        );
    }
}
