use crate::error::InvalidInput;

/// One multiple-choice prompt. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRecord {
    prompt: String,
    options: Vec<String>,
    correct_index: usize,
}

impl QuestionRecord {
    pub fn new(
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_index: usize,
    ) -> Result<Self, InvalidInput> {
        if options.len() < 2 {
            return Err(InvalidInput::TooFewOptions {
                count: options.len(),
            });
        }
        if correct_index >= options.len() {
            return Err(InvalidInput::CorrectIndexOutOfRange {
                index: correct_index,
                len: options.len(),
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            options,
            correct_index,
        })
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn correct_index(&self) -> usize {
        self.correct_index
    }

    pub fn correct_option(&self) -> &str {
        &self.options[self.correct_index]
    }
}

/// Position of `correct` in `shuffled`, first match wins.
pub fn reindex_after_shuffle(correct: &str, shuffled: &[String]) -> Option<usize> {
    shuffled.iter().position(|o| o == correct)
}

const LOCAL_BANK: [(&str, [&str; 4], usize); 3] = [
    (
        "What is the capital of France?",
        ["Berlin", "Madrid", "Paris", "Rome"],
        2,
    ),
    ("Which number is prime?", ["4", "6", "9", "7"], 3),
    (
        "Which language is this program written in?",
        ["Java", "C++", "Python", "Rust"],
        3,
    ),
];

/// Fixed bank used when the player picks the local source.
pub fn local_questions() -> Vec<QuestionRecord> {
    LOCAL_BANK
        .iter()
        .map(|(prompt, options, correct_index)| QuestionRecord {
            prompt: prompt.to_string(),
            options: options.iter().map(|o| o.to_string()).collect(),
            correct_index: *correct_index,
        })
        .collect()
}
