mod domain;
mod markup;
mod parser;

pub use domain::{GeneralInfo, ParsedSheet, QuestionResponse, QuestionType, Subject};
pub use parser::parse_sheet;

use thiserror::Error;

/// Structural failures of a response-sheet document. Missing individual
/// fields are not failures; the parser fills what it can find.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("document contains no question panels and is not a response sheet")]
    MissingQuestionPanels,
    #[error("response sheet repeats question id {question_id}")]
    DuplicateQuestionId { question_id: String },
}
