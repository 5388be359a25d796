use crate::scoring::{MarkingScheme, ScoreSummary};
use crate::sheet::GeneralInfo;
use std::fmt::Write;

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

/// Renders the score analysis as plain text, one candidate per call. The
/// delivery channel (chat message, terminal, email) owns any further
/// decoration; this stays undecorated on purpose.
pub fn format_report(info: &GeneralInfo, summary: &ScoreSummary, scheme: &MarkingScheme) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "JEE Mains Response Analysis");
    let _ = writeln!(out);
    let _ = writeln!(out, "Application No : {}", or_na(&info.application_number));
    let _ = writeln!(out, "Candidate      : {}", or_na(&info.candidate_name));
    let _ = writeln!(out, "Roll No        : {}", or_na(&info.roll_number));
    let _ = writeln!(out, "Exam Date      : {}", or_na(&info.test_date));
    let _ = writeln!(out, "Shift          : {}", or_na(&info.test_time));
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Correct     : {} ({:+} marks)",
        summary.correct,
        summary.correct as i64 * scheme.correct
    );
    let _ = writeln!(
        out,
        "Incorrect   : {} ({:+} marks)",
        summary.incorrect,
        -(summary.incorrect as i64) * scheme.incorrect_penalty
    );
    let _ = writeln!(out, "Unattempted : {} (0 marks)", summary.unattempted);
    let _ = writeln!(
        out,
        "Dropped     : {} ({:+} marks)",
        summary.dropped,
        summary.dropped as i64 * scheme.dropped
    );
    let _ = writeln!(
        out,
        "Attempted   : {}/{}",
        summary.attempted, summary.total_questions
    );
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Estimated score: {}/{}",
        summary.total_score, summary.max_score
    );

    if !summary.subjects.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Subject breakdown");
        for entry in &summary.subjects {
            let _ = writeln!(
                out,
                "- {}: {} correct, {} incorrect, {} unattempted, {} dropped",
                entry.subject_label,
                entry.correct,
                entry.incorrect,
                entry.unattempted,
                entry.dropped
            );
        }
    }

    let _ = writeln!(
        out,
        "\nMarking scheme: {:+} correct, -{} incorrect, 0 unattempted, {:+} dropped",
        scheme.correct, scheme.incorrect_penalty, scheme.dropped
    );

    out
}
