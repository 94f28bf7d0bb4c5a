use click_games::quiz::{local_questions, Phase, QuestionRecord, QuizSession, SelectOutcome};
use click_games::InvalidInput;
use proptest::prelude::*;

fn bank(len: usize) -> Vec<QuestionRecord> {
    (0..len)
        .map(|i| {
            let options = vec!["a".to_string(), "b".to_string(), "c".to_string()];
            QuestionRecord::new(format!("question {i}"), options, i % 3).unwrap()
        })
        .collect()
}

#[test]
fn capital_of_france() {
    let mut session = QuizSession::new(local_questions()).unwrap();
    let q = session.current_question().unwrap();
    assert_eq!(q.prompt(), "What is the capital of France?");

    assert_eq!(session.select_option(2), Ok(SelectOutcome::Correct));
    assert_eq!(session.score(), 1);
    assert_eq!(session.phase(), Phase::Answered);

    assert_eq!(session.advance(), Ok(Phase::AwaitingSelection));
    assert_eq!(session.cursor(), 1);
}

#[test]
fn empty_session_is_invalid_input() {
    assert_eq!(
        QuizSession::new(Vec::new()).unwrap_err(),
        InvalidInput::EmptyQuestionList
    );
}

proptest! {
    #[test]
    fn second_pick_is_locked(first in 0usize..3, second in 0usize..3) {
        let mut session = QuizSession::new(bank(2)).unwrap();
        session.select_option(first).unwrap();
        let score = session.score();
        prop_assert_eq!(session.select_option(second), Ok(SelectOutcome::Ignored));
        prop_assert_eq!(session.score(), score);
        prop_assert_eq!(session.selected(), Some(first));
    }

    #[test]
    fn exactly_len_advances_finish(len in 1usize..12, picks in prop::collection::vec(0usize..3, 12)) {
        let mut session = QuizSession::new(bank(len)).unwrap();
        let mut finished_seen = 0;
        for (i, pick) in picks.iter().take(len).enumerate() {
            prop_assert!(!session.is_finished());
            session.select_option(*pick).unwrap();
            let phase = session.advance().unwrap();
            if phase == Phase::Finished {
                finished_seen += 1;
                prop_assert_eq!(i + 1, len);
            }
        }
        prop_assert_eq!(finished_seen, 1);
        prop_assert!(session.is_finished());
        prop_assert!(session.score() as usize <= len);
        prop_assert_eq!(session.advance(), Err(InvalidInput::SessionFinished));
    }
}
