use crate::scoring::ScoreSummary;
use crate::sheet::GeneralInfo;
use std::io::Write;

/// Writes the per-subject breakdown (plus a totals row) as CSV. Candidate
/// identity repeats per row so exports from many sheets concatenate into
/// one sessions-wide file.
pub fn write_summary_csv<W: Write>(
    writer: W,
    info: &GeneralInfo,
    summary: &ScoreSummary,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record([
        "roll_number",
        "candidate",
        "subject",
        "correct",
        "incorrect",
        "unattempted",
        "dropped",
        "score",
    ])?;

    for entry in &summary.subjects {
        csv_writer.write_record([
            info.roll_number.as_str(),
            info.candidate_name.as_str(),
            &entry.subject_label,
            &entry.correct.to_string(),
            &entry.incorrect.to_string(),
            &entry.unattempted.to_string(),
            &entry.dropped.to_string(),
            "",
        ])?;
    }

    csv_writer.write_record([
        info.roll_number.as_str(),
        info.candidate_name.as_str(),
        "Total",
        &summary.correct.to_string(),
        &summary.incorrect.to_string(),
        &summary.unattempted.to_string(),
        &summary.dropped.to_string(),
        &summary.total_score.to_string(),
    ])?;

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::SubjectBreakdownEntry;
    use crate::sheet::Subject;

    #[test]
    fn export_writes_subject_rows_and_a_totals_row() {
        let info = GeneralInfo {
            roll_number: "AB123".to_string(),
            candidate_name: "An Example".to_string(),
            ..GeneralInfo::default()
        };
        let summary = ScoreSummary {
            correct: 21,
            incorrect: 4,
            unattempted: 3,
            dropped: 2,
            attempted: 25,
            total_questions: 30,
            total_score: 88,
            max_score: 120,
            subjects: vec![SubjectBreakdownEntry {
                subject: Subject::Chemistry,
                subject_label: "Chemistry".to_string(),
                correct: 21,
                incorrect: 4,
                unattempted: 3,
                dropped: 2,
            }],
        };

        let mut buffer = Vec::new();
        write_summary_csv(&mut buffer, &info, &summary).expect("export succeeds");
        let text = String::from_utf8(buffer).expect("valid utf-8");

        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("roll_number,candidate,subject,correct,incorrect,unattempted,dropped,score")
        );
        assert_eq!(lines.next(), Some("AB123,An Example,Chemistry,21,4,3,2,"));
        assert_eq!(lines.next(), Some("AB123,An Example,Total,21,4,3,2,88"));
        assert_eq!(lines.next(), None);
    }
}
