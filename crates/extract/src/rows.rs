//! Table row extraction.
//!
//! Both charts are plain HTML tables. Rows that lack the cells a consumer
//! needs (header rows, separator rows, version banners) are skipped silently;
//! that is expected table furniture, not an error.

use crate::consts;
use scraper::{ElementRef, Html};

/// A data row from the full emoji list chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiRow {
    /// Codepoint column text, e.g. `"U+1F91D"` or `"1F468 200D 1F373"`.
    pub code: String,
    /// Emoji name column text.
    pub name: String,
    /// Group column text.
    pub group: String,
}

/// A data row from the emoji counts chart: a label cell and a count cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountRow {
    pub label: String,
    pub count: String,
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Extracts every row of the emoji list chart that carries the three
/// semantic cells (`td.code`, `td.name`, `td.group`).
pub fn emoji_rows(document: &Html) -> Vec<EmojiRow> {
    let mut rows = Vec::new();
    for row in document.select(&consts::ROW_SELECTOR) {
        let code = row.select(&consts::CODE_CELL_SELECTOR).next().map(cell_text);
        let name = row.select(&consts::NAME_CELL_SELECTOR).next().map(cell_text);
        let group = row.select(&consts::GROUP_CELL_SELECTOR).next().map(cell_text);
        if let (Some(code), Some(name), Some(group)) = (code, name, group) {
            rows.push(EmojiRow { code, name, group });
        }
    }
    rows
}

/// Extracts every row of the counts chart with at least a label and a count
/// cell. Header cells (`th`) are included so the reconciler can apply its
/// skip-the-header-row strategy uniformly.
pub fn count_rows(document: &Html) -> Vec<CountRow> {
    let mut rows = Vec::new();
    for row in document.select(&consts::ROW_SELECTOR) {
        let mut cells = row.select(&consts::CELL_SELECTOR).map(cell_text);
        if let (Some(label), Some(count)) = (cells.next(), cells.next()) {
            rows.push(CountRow { label, count });
        }
    }
    rows
}
