//! Summary row extraction and the plaintext renderer.
//!
//! The CLI table and the web page show the same four columns; both go
//! through [`SummaryRow`] so the field extraction (including the
//! empty-string fallback for a missing translation) lives in one place.

use crate::store::WordRecord;

/// Display fields for one word, shared by the plaintext and HTML tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub word: String,
    pub added_count: i64,
    pub lookup_count: i64,
    /// Translation text, empty string when absent.
    pub translation: String,
}

impl From<&WordRecord> for SummaryRow {
    fn from(record: &WordRecord) -> Self {
        Self {
            word: record.word.clone(),
            added_count: record.added_count,
            lookup_count: record.lookup_count,
            translation: record.zh_trans.clone().unwrap_or_default(),
        }
    }
}

/// Extract display rows from records, preserving order.
pub fn summary_rows(records: &[WordRecord]) -> Vec<SummaryRow> {
    records.iter().map(SummaryRow::from).collect()
}

/// Render the fixed-width summary table printed by the `show` action.
pub fn render_plain(rows: &[SummaryRow]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>15} {:>11} {:>12} {:<12}\n",
        "Word", "Added Count", "Lookup Count", "Translation"
    ));
    for row in rows {
        out.push_str(&format!(
            "{:>15} {:>11} {:>12} {:<12}\n",
            row.word, row.added_count, row.lookup_count, row.translation
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(word: &str, zh_trans: Option<&str>, added: i64, lookup: i64) -> WordRecord {
        WordRecord {
            word: word.to_string(),
            zh_trans: zh_trans.map(str::to_string),
            added_count: added,
            lookup_count: lookup,
        }
    }

    #[test]
    fn test_missing_translation_renders_empty() {
        let rows = summary_rows(&[record("cat", None, 0, 0)]);
        assert_eq!(rows[0].translation, "");
    }

    #[test]
    fn test_plain_table_lists_every_row() {
        let rows = summary_rows(&[
            record("cat", Some("猫"), 2, 0),
            record("dog", None, 0, 3),
        ]);
        let table = render_plain(&rows);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("Word"));
        assert!(lines[0].contains("Added Count"));
        assert!(lines[1].contains("cat"));
        assert!(lines[1].contains("猫"));
        assert!(lines[2].contains("dog"));
    }

    #[test]
    fn test_row_order_matches_record_order() {
        let rows = summary_rows(&[record("b", None, 0, 0), record("a", None, 0, 0)]);
        assert_eq!(rows[0].word, "b");
        assert_eq!(rows[1].word, "a");
    }
}
