mod resolver;

pub use resolver::{session_id, ShiftRule, ShiftTable};

use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// The published answer for one question: a single accepted token, a
/// comma-delimited set of accepted tokens (multi-correct questions), or
/// the literal `Drop` marking the question voided for every candidate.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct AnswerKeyEntry(String);

const DROP_MARKER: &str = "Drop";

impl AnswerKeyEntry {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn is_dropped(&self) -> bool {
        self.0 == DROP_MARKER
    }

    /// Whether `answer` is one of the accepted tokens. Tokens are compared
    /// exactly as published; anything that is not a member is wrong.
    pub fn accepts(&self, answer: &str) -> bool {
        self.0.split(',').any(|token| token == answer)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Authoritative mapping from question id to its published answer for one
/// exam sitting.
pub type AnswerKey = HashMap<String, AnswerKeyEntry>;

/// Failures reading the bundled answer-key dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read answer-key dataset: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer-key dataset: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures resolving a candidate's sitting to a published answer key.
/// All are recoverable by the caller; `NotFound` in particular means the
/// authority has not published a key for that session yet.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("test date '{value}' is not a valid DD/MM/YYYY date")]
    MalformedDate { value: String },
    #[error("test time '{value}' does not match any known shift")]
    UnknownShift { value: String },
    #[error("no answer key published for session {session}")]
    NotFound { session: String },
}

/// Immutable session-to-key registry, loaded once at startup from the
/// bundled JSON dataset and read-only for the life of the process.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct AnswerKeyStore {
    sessions: HashMap<String, AnswerKey>,
}

impl AnswerKeyStore {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, StoreError> {
        let store = serde_json::from_reader(reader)?;
        Ok(store)
    }

    pub fn from_sessions(sessions: HashMap<String, AnswerKey>) -> Self {
        Self { sessions }
    }

    pub fn lookup(&self, session: &str) -> Result<&AnswerKey, KeyError> {
        self.sessions.get(session).ok_or_else(|| KeyError::NotFound {
            session: session.to_string(),
        })
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn entry_accepts_single_and_multi_correct_tokens() {
        let single = AnswerKeyEntry::new("9003");
        assert!(single.accepts("9003"));
        assert!(!single.accepts("9001"));

        let multi = AnswerKeyEntry::new("9001,9003");
        assert!(multi.accepts("9001"));
        assert!(multi.accepts("9003"));
        assert!(!multi.accepts("9002"));
    }

    #[test]
    fn drop_marker_is_not_an_acceptable_answer_set() {
        let entry = AnswerKeyEntry::new("Drop");
        assert!(entry.is_dropped());
        assert!(!AnswerKeyEntry::new("9001").is_dropped());
    }

    #[test]
    fn store_loads_from_json() {
        let data = r#"{
            "2024-01-27-shift-1": { "101": "9003", "102": "Drop" },
            "2024-01-27-shift-2": { "201": "9001,9002" }
        }"#;
        let store = AnswerKeyStore::from_reader(Cursor::new(data)).expect("dataset loads");
        assert_eq!(store.len(), 2);

        let key = store.lookup("2024-01-27-shift-1").expect("session present");
        assert!(key["102"].is_dropped());
        assert!(key["101"].accepts("9003"));
    }

    #[test]
    fn missing_session_is_a_recoverable_error() {
        let store = AnswerKeyStore::default();
        let err = store
            .lookup("2024-01-27-shift-1")
            .expect_err("expected a missing key");
        assert!(matches!(
            err,
            KeyError::NotFound { ref session } if session == "2024-01-27-shift-1"
        ));
    }

    #[test]
    fn malformed_dataset_reports_json_error() {
        let err = AnswerKeyStore::from_reader(Cursor::new("not json"))
            .expect_err("expected a dataset failure");
        assert!(matches!(err, StoreError::Json(_)));
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let err = AnswerKeyStore::from_path("./does-not-exist.json")
            .expect_err("expected an io failure");
        assert!(matches!(err, StoreError::Io(_)));
    }
}
