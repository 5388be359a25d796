use super::KeyError;
use crate::sheet::GeneralInfo;
use chrono::NaiveDate;

/// One shift bucket: a substring the printed test time must contain and
/// the label that shift carries in session identifiers.
#[derive(Debug, Clone)]
pub struct ShiftRule {
    pub marker: String,
    pub label: String,
}

impl ShiftRule {
    pub fn new(marker: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            label: label.into(),
        }
    }
}

/// Ordered shift rules for an exam cycle. Shift detection is substring
/// matching over the free-text time label the sheet prints, so cycles
/// with different slot wording (or more than two slots) supply their own
/// table instead of patching code.
#[derive(Debug, Clone)]
pub struct ShiftTable {
    rules: Vec<ShiftRule>,
}

impl ShiftTable {
    /// The two JEE Mains slots: 9:00 AM morning, 2:00 PM afternoon.
    pub fn standard() -> Self {
        Self::new(vec![
            ShiftRule::new("9:00", "shift-1"),
            ShiftRule::new("2:00", "shift-2"),
        ])
    }

    pub fn new(rules: Vec<ShiftRule>) -> Self {
        Self { rules }
    }

    fn resolve(&self, test_time: &str) -> Option<&str> {
        self.rules
            .iter()
            .find(|rule| test_time.contains(&rule.marker))
            .map(|rule| rule.label.as_str())
    }
}

/// Derives the session identifier (`YYYY-MM-DD-shift-N`) an answer key is
/// filed under from the candidate's printed test date and time.
///
/// The date must parse strictly as DD/MM/YYYY; a time label matching no
/// shift rule is an error rather than a silent default, so a sheet from
/// an unexpected slot surfaces instead of scoring against the wrong key.
pub fn session_id(info: &GeneralInfo, shifts: &ShiftTable) -> Result<String, KeyError> {
    let date = NaiveDate::parse_from_str(info.test_date.trim(), "%d/%m/%Y").map_err(|_| {
        KeyError::MalformedDate {
            value: info.test_date.clone(),
        }
    })?;

    let shift = shifts
        .resolve(&info.test_time)
        .ok_or_else(|| KeyError::UnknownShift {
            value: info.test_time.clone(),
        })?;

    Ok(format!("{}-{}", date.format("%Y-%m-%d"), shift))
}
