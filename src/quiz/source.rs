use std::time::Duration;

use bevy::log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Deserialize;

use super::question::{reindex_after_shuffle, QuestionRecord};
use crate::error::FetchError;

pub const OPENTDB_URL: &str = "https://opentdb.com/api.php";

/// Anything that can hand the quiz a list of questions from afar.
pub trait RemoteQuestions: Send + Sync {
    fn fetch(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError>;
}

/// OpenTDB multiple-choice endpoint, fetched with a blocking client.
#[derive(Debug, Clone)]
pub struct OpenTdb {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for OpenTdb {
    fn default() -> Self {
        Self {
            base_url: OPENTDB_URL.to_string(),
            timeout: Duration::from_secs(6),
        }
    }
}

impl OpenTdb {
    pub fn url(&self, count: usize) -> String {
        format!("{}?amount={count}&type=multiple", self.base_url)
    }
}

impl RemoteQuestions for OpenTdb {
    fn fetch(&self, count: usize) -> Result<Vec<QuestionRecord>, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(transport_error)?;
        let resp = client
            .get(self.url(count))
            .send()
            .map_err(transport_error)?;

        let status = resp.status();
        if !status.is_success() {
            warn!("OpenTDB answered {status}");
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = resp.text().map_err(transport_error)?;
        let payload: TriviaResponse =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;
        let questions = payload.into_questions(&mut rand::thread_rng())?;
        info!("Fetched {} questions from OpenTDB", questions.len());
        Ok(questions)
    }
}

fn transport_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else {
        FetchError::Transport(e.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct TriviaResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<TriviaItem>,
}

#[derive(Debug, Deserialize)]
pub struct TriviaItem {
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub correct_answer: String,
    #[serde(default)]
    pub incorrect_answers: Vec<String>,
}

impl TriviaResponse {
    pub fn into_questions<R: Rng + ?Sized>(
        self,
        rng: &mut R,
    ) -> Result<Vec<QuestionRecord>, FetchError> {
        if self.response_code != 0 {
            return Err(FetchError::ResponseCode(self.response_code));
        }
        let questions = self
            .results
            .into_iter()
            .map(|item| item.into_record(&mut *rng))
            .collect::<Result<Vec<_>, _>>()?;
        if questions.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(questions)
    }
}

impl TriviaItem {
    /// Unescapes every string, merges the answers and shuffles them.
    pub fn into_record<R: Rng + ?Sized>(self, rng: &mut R) -> Result<QuestionRecord, FetchError> {
        let prompt = unescape(&self.question);
        let correct = unescape(&self.correct_answer);
        let mut options: Vec<String> = self.incorrect_answers.iter().map(|s| unescape(s)).collect();
        options.push(correct.clone());
        options.shuffle(rng);

        let correct_index = reindex_after_shuffle(&correct, &options)
            .ok_or_else(|| FetchError::InvalidRecord(format!("lost answer {correct:?}")))?;
        QuestionRecord::new(prompt, options, correct_index)
            .map_err(|e| FetchError::InvalidRecord(e.to_string()))
    }
}

fn unescape(s: &str) -> String {
    html_escape::decode_html_entities(s).into_owned()
}
