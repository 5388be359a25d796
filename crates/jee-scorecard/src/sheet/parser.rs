use super::domain::{GeneralInfo, ParsedSheet, QuestionResponse, QuestionType, Subject};
use super::{markup, SheetError};
use std::collections::HashSet;
use tracing::debug;

/// Structural marker every genuine response sheet carries on its question
/// panels. A document without it is not a response sheet at all.
const PANEL_MARKER: &str = "question-pnl";

/// Extracts the candidate record and every question response from a raw
/// response-sheet document.
///
/// General-information fields are filled best-effort and default to empty
/// strings; only the complete absence of question panels (or a duplicated
/// question id, which indicates a corrupt document) is an error.
pub fn parse_sheet(html: &str) -> Result<ParsedSheet, SheetError> {
    if !html.contains(PANEL_MARKER) {
        return Err(SheetError::MissingQuestionPanels);
    }

    let general_info = extract_general_info(html);
    let sections = markup::section_labels(html);

    let mut questions = Vec::new();
    let mut seen_ids: HashSet<String> = HashSet::new();
    for (offset, block) in markup::marked_blocks(html, PANEL_MARKER) {
        let subject = subject_at(&sections, offset);
        match extract_question(block, subject) {
            Some(question) => {
                if !seen_ids.insert(question.question_id.clone()) {
                    return Err(SheetError::DuplicateQuestionId {
                        question_id: question.question_id,
                    });
                }
                questions.push(question);
            }
            // Decorative or malformed panels carry no question id.
            None => debug!("skipping question panel without a question id"),
        }
    }

    Ok(ParsedSheet {
        general_info,
        questions,
    })
}

fn extract_general_info(html: &str) -> GeneralInfo {
    let mut info = GeneralInfo::default();
    let Some(table) = markup::info_table(html) else {
        return info;
    };

    for row in markup::rows(table) {
        if row.len() < 2 {
            continue;
        }
        let label = row[0].text.to_lowercase();
        let value = row[1].text.trim().to_string();
        let field = if label.contains("application") {
            &mut info.application_number
        } else if label.contains("name") {
            &mut info.candidate_name
        } else if label.contains("roll") {
            &mut info.roll_number
        } else if label.contains("date") {
            &mut info.test_date
        } else if label.contains("time") {
            &mut info.test_time
        } else {
            continue;
        };
        // First matching row wins; later duplicates are ignored.
        if field.is_empty() {
            *field = value;
        }
    }

    info
}

fn extract_question(block: &str, subject: Subject) -> Option<QuestionResponse> {
    let cells = markup::cells(block);
    let question_id = markup::value_after(&cells, "Question ID")?;
    let question_type = markup::value_after(&cells, "Question Type")
        .map(|label| QuestionType::from_label(&label))
        .unwrap_or(QuestionType::Other);

    let given_answer = match question_type {
        QuestionType::Mcq => chosen_option_value(&cells),
        QuestionType::Sa => short_answer_value(&cells),
        QuestionType::Other => None,
    };

    Some(QuestionResponse {
        question_id,
        given_answer,
        subject,
        question_type,
    })
}

/// For MCQ panels the chosen option is a letter or digit; the value the
/// answer key compares against sits in the sibling cell of the matching
/// "Option {n}" label. A chosen letter whose option cell cannot be found
/// reads as unanswered.
fn chosen_option_value(cells: &[markup::Cell]) -> Option<String> {
    let chosen = markup::value_after(cells, "Chosen Option")?;
    markup::value_after(cells, &format!("Option {chosen}"))
}

/// Short-answer panels print the typed answer in the one bold,
/// word-break styled cell of the panel.
fn short_answer_value(cells: &[markup::Cell]) -> Option<String> {
    cells
        .iter()
        .find(|cell| cell.attrs.contains("bold") && cell.attrs.contains("word-break"))
        .map(|cell| cell.text.trim().to_string())
        .filter(|text| !text.is_empty())
}

/// The subject of a panel is the nearest section heading above it.
fn subject_at(sections: &[(usize, String)], panel_offset: usize) -> Subject {
    sections
        .iter()
        .take_while(|(offset, _)| *offset < panel_offset)
        .last()
        .map(|(_, label)| Subject::from_section_label(label))
        .unwrap_or(Subject::Unknown)
}
