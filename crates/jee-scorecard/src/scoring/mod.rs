mod report;

pub use report::{ScoreSummary, SubjectBreakdownEntry};

use crate::answer_key::AnswerKey;
use crate::sheet::{QuestionResponse, Subject};
use serde::Serialize;
use std::collections::HashMap;

/// Marks awarded per outcome. JEE Mains awards +4 for a correct answer,
/// deducts 1 for an incorrect one, and credits dropped questions at full
/// marks for every candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkingScheme {
    pub correct: i64,
    pub incorrect_penalty: i64,
    pub dropped: i64,
}

impl MarkingScheme {
    pub const fn standard() -> Self {
        Self {
            correct: 4,
            incorrect_penalty: 1,
            dropped: 4,
        }
    }
}

/// Per-subject outcome counters. One entry exists for each subject seen
/// while walking the answer key, so an `Unknown` bucket appears exactly
/// when something fails to resolve.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubjectStats {
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub dropped: usize,
}

/// Aggregate result of scoring one sheet against one answer key. Built
/// fresh per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub incorrect: usize,
    pub dropped: usize,
    pub attempted: usize,
    pub total_questions: usize,
    pub total_score: i64,
    pub max_score: i64,
    pub subjects: HashMap<Subject, SubjectStats>,
}

impl ScoreReport {
    /// Unattempted is derived, not accumulated: everything the key names
    /// that was neither answered nor dropped.
    pub fn unattempted(&self) -> usize {
        self.total_questions - self.attempted - self.dropped
    }
}

/// Scores a sheet under the standard JEE Mains marking scheme.
pub fn evaluate(questions: &[QuestionResponse], key: &AnswerKey) -> ScoreReport {
    evaluate_with(questions, key, MarkingScheme::standard())
}

/// Scores a sheet under an explicit marking scheme.
///
/// The pass walks the ANSWER KEY, not the candidate's responses: the key
/// is authoritative, so candidate answers for questions outside it never
/// influence the score, and key entries the candidate never saw count as
/// unattempted. Data-level irregularities (unmatched ids, unresolvable
/// subjects) degrade gracefully; this function cannot fail.
pub fn evaluate_with(
    questions: &[QuestionResponse],
    key: &AnswerKey,
    scheme: MarkingScheme,
) -> ScoreReport {
    let mut correct = 0usize;
    let mut incorrect = 0usize;
    let mut dropped = 0usize;
    let mut attempted = 0usize;
    let mut subjects: HashMap<Subject, SubjectStats> = HashMap::new();

    for (question_id, entry) in key {
        // First match wins if the input ever carries duplicate ids; the
        // parser rejects such sheets before they get here.
        let response = questions
            .iter()
            .find(|question| &question.question_id == question_id);
        let subject = response.map(|r| r.subject).unwrap_or(Subject::Unknown);
        let stats = subjects.entry(subject).or_default();

        if entry.is_dropped() {
            dropped += 1;
            stats.dropped += 1;
            continue;
        }

        match response.and_then(|r| r.given_answer.as_deref()) {
            Some(answer) => {
                attempted += 1;
                if entry.accepts(answer) {
                    correct += 1;
                    stats.correct += 1;
                } else {
                    incorrect += 1;
                    stats.incorrect += 1;
                }
            }
            None => stats.unattempted += 1,
        }
    }

    let total_score = correct as i64 * scheme.correct - incorrect as i64 * scheme.incorrect_penalty
        + dropped as i64 * scheme.dropped;

    ScoreReport {
        correct,
        incorrect,
        dropped,
        attempted,
        total_questions: key.len(),
        total_score,
        max_score: key.len() as i64 * scheme.correct,
        subjects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::answer_key::AnswerKeyEntry;
    use crate::sheet::QuestionType;

    fn response(question_id: &str, answer: Option<&str>, subject: Subject) -> QuestionResponse {
        QuestionResponse {
            question_id: question_id.to_string(),
            given_answer: answer.map(str::to_string),
            subject,
            question_type: QuestionType::Mcq,
        }
    }

    fn key(entries: &[(&str, &str)]) -> AnswerKey {
        entries
            .iter()
            .map(|(id, raw)| (id.to_string(), AnswerKeyEntry::new(*raw)))
            .collect()
    }

    #[test]
    fn correct_incorrect_and_unattempted_are_tallied_per_subject() {
        let key = key(&[("1", "A"), ("2", "B"), ("3", "C")]);
        let questions = vec![
            response("1", Some("A"), Subject::Physics),
            response("2", Some("X"), Subject::Physics),
            response("3", None, Subject::Chemistry),
        ];

        let report = evaluate(&questions, &key);
        assert_eq!(report.correct, 1);
        assert_eq!(report.incorrect, 1);
        assert_eq!(report.attempted, 2);
        assert_eq!(report.unattempted(), 1);
        assert_eq!(report.total_questions, 3);
        assert_eq!(report.total_score, 4 - 1);

        let physics = report.subjects[&Subject::Physics];
        assert_eq!((physics.correct, physics.incorrect), (1, 1));
        let chemistry = report.subjects[&Subject::Chemistry];
        assert_eq!(chemistry.unattempted, 1);
    }

    #[test]
    fn drop_supersedes_an_attempted_answer() {
        let key = key(&[("1", "Drop")]);
        let questions = vec![response("1", Some("A"), Subject::Maths)];

        let report = evaluate(&questions, &key);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.correct, 0);
        assert_eq!(report.incorrect, 0);
        assert_eq!(report.attempted, 0);
        assert_eq!(report.unattempted(), 0);
        assert_eq!(report.total_score, 4);
        assert_eq!(report.subjects[&Subject::Maths].dropped, 1);
    }

    #[test]
    fn dropped_questions_credit_candidates_who_skipped_them() {
        let key = key(&[("1", "Drop")]);
        let report = evaluate(&[], &key);
        assert_eq!(report.dropped, 1);
        assert_eq!(report.total_score, 4);
        // The question never classifies as unattempted.
        assert_eq!(report.unattempted(), 0);
        assert_eq!(report.subjects[&Subject::Unknown].dropped, 1);
    }

    #[test]
    fn multi_correct_entries_accept_any_member() {
        let key = key(&[("Q1", "A,B")]);
        let report = evaluate(&[response("Q1", Some("B"), Subject::Physics)], &key);
        assert_eq!(report.correct, 1);

        let report = evaluate(&[response("Q1", Some("C"), Subject::Physics)], &key);
        assert_eq!(report.incorrect, 1);
    }

    #[test]
    fn answers_outside_the_key_are_invisible() {
        let key = key(&[("1", "A")]);
        let questions = vec![
            response("1", Some("A"), Subject::Physics),
            response("999", Some("B"), Subject::Physics),
        ];

        let report = evaluate(&questions, &key);
        assert_eq!(report.total_questions, 1);
        assert_eq!(report.correct, 1);
        assert_eq!(report.incorrect, 0);
        assert_eq!(report.total_score, 4);
    }

    #[test]
    fn key_entries_without_a_response_count_as_unknown_unattempted() {
        let key = key(&[("1", "A")]);
        let report = evaluate(&[], &key);
        assert_eq!(report.attempted, 0);
        assert_eq!(report.unattempted(), 1);
        assert_eq!(report.subjects[&Subject::Unknown].unattempted, 1);
    }

    #[test]
    fn total_score_can_go_negative() {
        let key = key(&[("1", "A"), ("2", "B"), ("3", "C"), ("4", "D"), ("5", "E")]);
        let questions: Vec<_> = key
            .keys()
            .map(|id| response(id, Some("wrong"), Subject::Physics))
            .collect();

        let report = evaluate(&questions, &key);
        assert_eq!(report.total_score, -5);
    }

    #[test]
    fn custom_schemes_change_only_the_arithmetic() {
        let key = key(&[("1", "A"), ("2", "B")]);
        let questions = vec![
            response("1", Some("A"), Subject::Physics),
            response("2", Some("X"), Subject::Physics),
        ];
        let scheme = MarkingScheme {
            correct: 3,
            incorrect_penalty: 0,
            dropped: 3,
        };

        let report = evaluate_with(&questions, &key, scheme);
        assert_eq!(report.total_score, 3);
        assert_eq!(report.max_score, 6);
    }

    #[test]
    fn evaluation_is_deterministic() {
        let key = key(&[("1", "A"), ("2", "Drop"), ("3", "B,C"), ("4", "D")]);
        let questions = vec![
            response("1", Some("A"), Subject::Physics),
            response("3", Some("C"), Subject::Chemistry),
            response("4", None, Subject::Maths),
        ];

        let first = evaluate(&questions, &key);
        let second = evaluate(&questions, &key);
        assert_eq!(first, second);
    }
}
