use super::{ScoreReport, SubjectStats};
use crate::sheet::Subject;
use serde::Serialize;

/// Serializable view of a [`ScoreReport`], the stable shape downstream
/// consumers (chat delivery, dashboards, exporters) build on. Subjects
/// are emitted in display order rather than map order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub dropped: usize,
    pub attempted: usize,
    pub total_questions: usize,
    pub total_score: i64,
    pub max_score: i64,
    pub subjects: Vec<SubjectBreakdownEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubjectBreakdownEntry {
    pub subject: Subject,
    pub subject_label: String,
    pub correct: usize,
    pub incorrect: usize,
    pub unattempted: usize,
    pub dropped: usize,
}

impl ScoreReport {
    pub fn summary(&self) -> ScoreSummary {
        let subjects = Subject::ordered()
            .into_iter()
            .filter_map(|subject| {
                self.subjects
                    .get(&subject)
                    .map(|stats| SubjectBreakdownEntry::new(subject, *stats))
            })
            .collect();

        ScoreSummary {
            correct: self.correct,
            incorrect: self.incorrect,
            unattempted: self.unattempted(),
            dropped: self.dropped,
            attempted: self.attempted,
            total_questions: self.total_questions,
            total_score: self.total_score,
            max_score: self.max_score,
            subjects,
        }
    }
}

impl SubjectBreakdownEntry {
    fn new(subject: Subject, stats: SubjectStats) -> Self {
        Self {
            subject,
            subject_label: subject.label().to_string(),
            correct: stats.correct,
            incorrect: stats.incorrect,
            unattempted: stats.unattempted,
            dropped: stats.dropped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn summary_orders_subjects_and_skips_absent_ones() {
        let mut subjects = HashMap::new();
        subjects.insert(
            Subject::Maths,
            SubjectStats {
                correct: 10,
                ..SubjectStats::default()
            },
        );
        subjects.insert(
            Subject::Physics,
            SubjectStats {
                correct: 12,
                ..SubjectStats::default()
            },
        );

        let report = ScoreReport {
            correct: 22,
            incorrect: 0,
            dropped: 0,
            attempted: 22,
            total_questions: 50,
            total_score: 88,
            max_score: 200,
            subjects,
        };

        let summary = report.summary();
        assert_eq!(summary.subjects.len(), 2);
        assert_eq!(summary.subjects[0].subject, Subject::Physics);
        assert_eq!(summary.subjects[1].subject, Subject::Maths);
        assert_eq!(summary.subjects[1].subject_label, "Mathematics");
        assert_eq!(summary.unattempted, 28);
    }

    #[test]
    fn derived_unattempted_accounting_holds() {
        let report = ScoreReport {
            correct: 60,
            incorrect: 10,
            dropped: 2,
            attempted: 70,
            total_questions: 75,
            total_score: 238,
            max_score: 300,
            subjects: HashMap::new(),
        };

        let summary = report.summary();
        assert_eq!(summary.unattempted, 3);
        assert_eq!(
            summary.correct + summary.incorrect + summary.dropped + summary.unattempted,
            summary.total_questions
        );
    }
}
