//! Best-effort scanner for the loosely structured markup the testing
//! authority publishes. The sheet encodes meaning in label text and cell
//! adjacency rather than any typed schema, so every helper here returns
//! `Option` instead of failing; the parser decides what a missing piece
//! means.

use regex::Regex;
use std::sync::OnceLock;

/// One `<td>` with its raw attribute string and tag-free text.
#[derive(Debug, Clone)]
pub(crate) struct Cell {
    pub(crate) attrs: String,
    pub(crate) text: String,
}

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag pattern"))
}

fn cell_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<td([^>]*)>(.*?)</td>").expect("valid cell pattern"))
}

fn row_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<tr[^>]*>(.*?)</tr>").expect("valid row pattern"))
}

fn info_table_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // The candidate details live in the one fixed-width table on the page.
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<table[^>]*width\s*:\s*500px[^>]*>(.*?)</table>"#)
            .expect("valid info table pattern")
    })
}

fn section_label_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"(?is)<[^>]*class="section-lbl"[^>]*>(.*?)</div>"#)
            .expect("valid section label pattern")
    })
}

/// Drops tags, decodes the handful of entities the sheet uses, and
/// collapses whitespace.
pub(crate) fn strip_tags(fragment: &str) -> String {
    let text = tag_re().replace_all(fragment, " ");
    let decoded = text
        .replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#039;", "'")
        .replace("&#39;", "'")
        .replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// All table cells of a fragment, in document order.
pub(crate) fn cells(fragment: &str) -> Vec<Cell> {
    cell_re()
        .captures_iter(fragment)
        .map(|caps| Cell {
            attrs: caps[1].to_string(),
            text: strip_tags(&caps[2]),
        })
        .collect()
}

/// All table rows of a fragment, each reduced to its cells.
pub(crate) fn rows(fragment: &str) -> Vec<Vec<Cell>> {
    row_re()
        .captures_iter(fragment)
        .map(|caps| cells(&caps[1]))
        .collect()
}

/// The cell following the first cell whose text contains `label`, the
/// sheet's convention for label/value pairs.
pub(crate) fn value_after(cells: &[Cell], label: &str) -> Option<String> {
    let position = cells.iter().position(|cell| cell.text.contains(label))?;
    let value = cells.get(position + 1)?.text.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

/// Body of the fixed-width general-information table, if present.
pub(crate) fn info_table(html: &str) -> Option<&str> {
    info_table_re()
        .captures(html)
        .and_then(|caps| caps.get(1))
        .map(|body| body.as_str())
}

/// Byte offsets and text of every section heading, in document order.
pub(crate) fn section_labels(html: &str) -> Vec<(usize, String)> {
    section_label_re()
        .captures_iter(html)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            Some((whole.start(), strip_tags(&caps[1])))
        })
        .collect()
}

/// Splits the document into blocks starting at each occurrence of
/// `marker` and running to the next occurrence (or end of input).
pub(crate) fn marked_blocks<'a>(html: &'a str, marker: &str) -> Vec<(usize, &'a str)> {
    let starts: Vec<usize> = html.match_indices(marker).map(|(idx, _)| idx).collect();
    starts
        .iter()
        .enumerate()
        .map(|(i, &start)| {
            let end = starts.get(i + 1).copied().unwrap_or(html.len());
            (start, &html[start..end])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_tags_decodes_entities_and_collapses_whitespace() {
        let fragment = "<span class=\"bold\">A &amp; B</span>\n\t <b>&#039;C&#039;</b>";
        assert_eq!(strip_tags(fragment), "A & B 'C'");
    }

    #[test]
    fn cells_capture_attributes_and_text() {
        let fragment =
            "<td class=\"bold\">Question ID :</td><td style=\"word-break:break-all\">90210</td>";
        let cells = cells(fragment);
        assert_eq!(cells.len(), 2);
        assert!(cells[0].attrs.contains("bold"));
        assert_eq!(cells[1].text, "90210");
    }

    #[test]
    fn value_after_returns_the_sibling_cell() {
        let fragment = "<tr><td>Question Type :</td><td>MCQ</td></tr>\
                        <tr><td>Chosen Option :</td><td>2</td></tr>";
        let cells = cells(fragment);
        assert_eq!(value_after(&cells, "Question Type").as_deref(), Some("MCQ"));
        assert_eq!(value_after(&cells, "Chosen Option").as_deref(), Some("2"));
        assert_eq!(value_after(&cells, "Status"), None);
    }

    #[test]
    fn value_after_treats_blank_sibling_as_absent() {
        let fragment = "<td>Chosen Option :</td><td>  </td>";
        assert_eq!(value_after(&cells(fragment), "Chosen Option"), None);
    }

    #[test]
    fn marked_blocks_split_on_every_marker() {
        let html = "prefix question-pnl one question-pnl two";
        let blocks = marked_blocks(html, "question-pnl");
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].1.contains("one"));
        assert!(blocks[1].1.contains("two"));
        assert!(blocks[0].0 < blocks[1].0);
    }

    #[test]
    fn info_table_requires_the_fixed_width_marker() {
        let html = "<table style=\"width:500px\"><tr><td>Name</td><td>X</td></tr></table>";
        assert!(info_table(html).is_some());
        assert!(info_table("<table><tr><td>Name</td></tr></table>").is_none());
    }

    #[test]
    fn section_labels_report_document_order() {
        let html = "<div class=\"section-lbl\"><span>Physics</span></div>\
                    filler\
                    <div class=\"section-lbl\"><span>Chemistry</span></div>";
        let labels = section_labels(html);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].1, "Physics");
        assert_eq!(labels[1].1, "Chemistry");
        assert!(labels[0].0 < labels[1].0);
    }
}
