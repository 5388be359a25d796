use serde::{Deserialize, Serialize};

/// Scored academic section of the exam, plus a tolerance bucket for
/// panels whose enclosing section could not be resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Physics,
    Chemistry,
    Maths,
    Unknown,
}

impl Subject {
    pub const fn ordered() -> [Self; 4] {
        [Self::Physics, Self::Chemistry, Self::Maths, Self::Unknown]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Physics => "Physics",
            Self::Chemistry => "Chemistry",
            Self::Maths => "Mathematics",
            Self::Unknown => "Unknown",
        }
    }

    /// Maps a section heading to a subject. The headings are matched on
    /// the exact substrings the sheet emits, case included.
    pub fn from_section_label(label: &str) -> Self {
        if label.contains("Physics") {
            Self::Physics
        } else if label.contains("Chemistry") {
            Self::Chemistry
        } else if label.contains("Mathematics") {
            Self::Maths
        } else {
            Self::Unknown
        }
    }
}

/// How the answer was recorded on the sheet. `Other` covers panel types
/// the parser does not recognize; those always read as unanswered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Mcq,
    Sa,
    Other,
}

impl QuestionType {
    pub fn from_label(label: &str) -> Self {
        match label {
            "MCQ" => Self::Mcq,
            "SA" => Self::Sa,
            _ => Self::Other,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Mcq => "MCQ",
            Self::Sa => "SA",
            Self::Other => "Other",
        }
    }
}

/// Candidate and session identity printed at the top of the sheet.
///
/// Every field is extracted independently; a missing row leaves its field
/// empty without affecting the others. `test_date` keeps the DD/MM/YYYY
/// textual form as printed, the session resolver parses it later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralInfo {
    pub application_number: String,
    pub candidate_name: String,
    pub roll_number: String,
    pub test_date: String,
    pub test_time: String,
}

/// One question panel from the sheet. `given_answer` is `None` when the
/// candidate left the question blank (the sheet prints "No Answer").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub question_id: String,
    pub given_answer: Option<String>,
    pub subject: Subject,
    pub question_type: QuestionType,
}

/// Everything extracted from one response sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSheet {
    pub general_info: GeneralInfo,
    pub questions: Vec<QuestionResponse>,
}
