use bevy::log::debug;

use super::question::QuestionRecord;
use crate::error::InvalidInput;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Phase {
    #[default]
    AwaitingSelection,
    Answered,
    Finished,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SelectOutcome {
    Correct,
    Wrong,
    /// The current question was already answered; selection stays locked.
    Ignored,
}

/// Pages through a non-empty question list, one locked answer per question.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<QuestionRecord>,
    cursor: usize,
    score: u32,
    selected: Option<usize>,
    phase: Phase,
}

impl QuizSession {
    pub fn new(questions: Vec<QuestionRecord>) -> Result<Self, InvalidInput> {
        if questions.is_empty() {
            return Err(InvalidInput::EmptyQuestionList);
        }
        Ok(Self {
            questions,
            cursor: 0,
            score: 0,
            selected: None,
            phase: Phase::AwaitingSelection,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn current_question(&self) -> Option<&QuestionRecord> {
        match self.phase {
            Phase::Finished => None,
            _ => self.questions.get(self.cursor),
        }
    }

    /// `Some` only while the current question is answered.
    pub fn answered_correctly(&self) -> Option<bool> {
        let selected = self.selected?;
        let q = self.current_question()?;
        Some(selected == q.correct_index())
    }

    pub fn select_option(&mut self, index: usize) -> Result<SelectOutcome, InvalidInput> {
        match self.phase {
            Phase::Finished => Err(InvalidInput::SessionFinished),
            Phase::Answered => Ok(SelectOutcome::Ignored),
            Phase::AwaitingSelection => {
                let q = &self.questions[self.cursor];
                let len = q.options().len();
                if index >= len {
                    return Err(InvalidInput::OptionOutOfRange { index, len });
                }
                let correct = index == q.correct_index();
                debug!(
                    "question {}: selected option {index}, correct = {}",
                    self.cursor,
                    q.correct_index()
                );
                if correct {
                    self.score += 1;
                }
                self.selected = Some(index);
                self.phase = Phase::Answered;
                Ok(if correct {
                    SelectOutcome::Correct
                } else {
                    SelectOutcome::Wrong
                })
            }
        }
    }

    pub fn advance(&mut self) -> Result<Phase, InvalidInput> {
        match self.phase {
            Phase::Finished => Err(InvalidInput::SessionFinished),
            Phase::AwaitingSelection => Err(InvalidInput::NotAnswered),
            Phase::Answered => {
                self.cursor += 1;
                self.selected = None;
                self.phase = if self.cursor == self.questions.len() {
                    Phase::Finished
                } else {
                    Phase::AwaitingSelection
                };
                Ok(self.phase)
            }
        }
    }
}
