//! Count reconciliation for the emoji counts chart.
//!
//! Authoritative table shape: the first extracted row is a header and is
//! skipped wholesale; every following row is `label, count`. The chart's
//! exact column layout has shifted between Unicode versions, so anything
//! beyond the first two cells is treated as best-effort and ignored.

use crate::consts;
use crate::error::{ErrorKind, Result};
use crate::rows::CountRow;
use exn::OptionExt;
use scraper::Html;
use std::collections::BTreeMap;
use tracing::instrument;

use crate::models::CountStats;

fn parse_count(text: &str) -> Option<u64> {
    text.replace(',', "").trim().parse().ok()
}

/// Reconciles the counts chart rows into a [`CountStats`].
///
/// Recognized labels (case-sensitive): `Component`, `Total`, and the
/// "skin tone variations" row. Any other label with a numeric count becomes
/// a per-group count, except the header token `Group`.
///
/// Fails when `Total` or the variation count never appear, or when
/// `total - variations - components` underflows; a catalog whose arithmetic
/// does not close is a data integrity failure, never a silent zero.
#[instrument(skip(rows), fields(row_count = rows.len()))]
pub fn reconcile(rows: &[CountRow], dual_skin_tone_support_count: u64) -> Result<CountStats> {
    let mut component: Option<u64> = None;
    let mut total: Option<u64> = None;
    let mut variations: Option<u64> = None;
    let mut group_counts: BTreeMap<String, u64> = BTreeMap::new();
    // First row is the column header, whatever it says.
    for row in rows.iter().skip(1) {
        match row.label.as_str() {
            "Component" => {
                component = Some(parse_count(&row.count).ok_or_raise(|| ErrorKind::ParseError {
                    field: "component count",
                    value: row.count.clone(),
                })?);
            }
            "Total" => {
                total = Some(parse_count(&row.count).ok_or_raise(|| ErrorKind::ParseError {
                    field: "total count",
                    value: row.count.clone(),
                })?);
            }
            label if label.contains("skin tone") => {
                variations = Some(parse_count(&row.count).ok_or_raise(|| ErrorKind::ParseError {
                    field: "skin tone variation count",
                    value: row.count.clone(),
                })?);
            }
            "Group" => {}
            label => {
                // Non-numeric labels are chart furniture; skip them.
                if let Some(count) = parse_count(&row.count) {
                    group_counts.insert(label.to_string(), count);
                }
            }
        }
    }
    let total = total.ok_or_raise(|| ErrorKind::MissingCount("Total"))?;
    let variations = variations.ok_or_raise(|| ErrorKind::MissingCount("skin tone variations"))?;
    let component = component.unwrap_or(0);
    let total_without_skin_tone_variations =
        total.checked_sub(variations).and_then(|rest| rest.checked_sub(component)).ok_or_raise(|| {
            ErrorKind::Integrity(format!(
                "total {total} minus {variations} skin tone variations minus {component} components is negative"
            ))
        })?;
    Ok(CountStats {
        total_without_skin_tone_variations,
        component_count: component,
        dual_skin_tone_support_count,
        group_counts,
        emoji_version: None,
        last_update: None,
    })
}

/// Scrapes the chart's version tag ("Emoji Counts, v16.0") from its title or
/// first heading, when present.
pub fn emoji_version(document: &Html) -> Option<String> {
    for heading in document.select(&consts::HEADING_SELECTOR) {
        let text = heading.text().collect::<String>();
        if let Some(captures) = consts::VERSION_REGEX.captures(&text) {
            return captures.get(1).map(|m| m.as_str().to_string());
        }
    }
    None
}
