use std::fmt;

/// Caller handed the quiz core something it cannot act on. Fatal to the
/// operation only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvalidInput {
    EmptyQuestionList,
    TooFewOptions { count: usize },
    CorrectIndexOutOfRange { index: usize, len: usize },
    OptionOutOfRange { index: usize, len: usize },
    NotAnswered,
    SessionFinished,
}

impl fmt::Display for InvalidInput {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidInput::EmptyQuestionList => write!(f, "question list is empty"),
            InvalidInput::TooFewOptions { count } => {
                write!(f, "a question needs at least 2 options, got {count}")
            }
            InvalidInput::CorrectIndexOutOfRange { index, len } => {
                write!(f, "correct index {index} is outside {len} options")
            }
            InvalidInput::OptionOutOfRange { index, len } => {
                write!(f, "option {index} is outside {len} options")
            }
            InvalidInput::NotAnswered => write!(f, "current question has not been answered"),
            InvalidInput::SessionFinished => write!(f, "quiz session is already finished"),
        }
    }
}

impl std::error::Error for InvalidInput {}

/// Remote question source failure. The `Display` text is what the player sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Timeout,
    Transport(String),
    Status(u16),
    Parse(String),
    ResponseCode(i64),
    Empty,
    InvalidRecord(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            FetchError::Timeout => write!(f, "timeout"),
            FetchError::Transport(reason) => write!(f, "network error: {reason}"),
            FetchError::Status(code) => write!(f, "server answered HTTP {code}"),
            FetchError::Parse(reason) => write!(f, "unreadable response: {reason}"),
            FetchError::ResponseCode(code) => {
                write!(f, "OpenTDB returned no questions (response_code {code})")
            }
            FetchError::Empty => write!(f, "response contained no questions"),
            FetchError::InvalidRecord(reason) => write!(f, "bad question record: {reason}"),
        }
    }
}

impl std::error::Error for FetchError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    InvalidInput(InvalidInput),
    Fetch(FetchError),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            QuizError::InvalidInput(e) => write!(f, "invalid input: {e}"),
            QuizError::Fetch(e) => write!(f, "fetch failed: {e}"),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::InvalidInput(e) => Some(e),
            QuizError::Fetch(e) => Some(e),
        }
    }
}

impl From<InvalidInput> for QuizError {
    fn from(e: InvalidInput) -> Self {
        QuizError::InvalidInput(e)
    }
}

impl From<FetchError> for QuizError {
    fn from(e: FetchError) -> Self {
        QuizError::Fetch(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_reads_as_timeout() {
        assert_eq!(FetchError::Timeout.to_string(), "timeout");
    }

    #[test]
    fn wrapped_errors_keep_their_source() {
        use std::error::Error;
        let e: QuizError = InvalidInput::EmptyQuestionList.into();
        assert_eq!(e.to_string(), "invalid input: question list is empty");
        assert!(e.source().is_some());
    }
}
