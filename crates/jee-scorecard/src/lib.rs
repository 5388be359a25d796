//! Core library for the JEE Mains response-sheet scorer.
//!
//! The pipeline is three pure stages: [`sheet::parse_sheet`] turns the
//! raw HTML a candidate downloads from the testing authority into a
//! [`sheet::ParsedSheet`]; [`answer_key::session_id`] resolves which
//! published answer key applies to that sitting; [`scoring::evaluate`]
//! walks the key against the candidate's responses and produces a
//! [`scoring::ScoreReport`]. None of the stages performs I/O or keeps
//! state between calls, so they are freely usable in parallel across
//! documents. The only long-lived structure is the read-only
//! [`answer_key::AnswerKeyStore`] built once at startup.

pub mod answer_key;
pub mod config;
pub mod error;
pub mod report;
pub mod scoring;
pub mod sheet;
pub mod telemetry;

pub use answer_key::{AnswerKey, AnswerKeyEntry, AnswerKeyStore, ShiftTable};
pub use error::AppError;
pub use scoring::{evaluate, MarkingScheme, ScoreReport, ScoreSummary};
pub use sheet::{parse_sheet, GeneralInfo, ParsedSheet, QuestionResponse, Subject};
