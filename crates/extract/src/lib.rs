//! Parsing and derivation logic for the Unicode emoji charts.
//!
//! Two entrypoints cover the two reference pages: [`parse_emoji_page`] turns
//! the full emoji list into a keyed [`EmojiIndex`] with generated skin tone
//! variants, and [`parse_counts_page`] turns the counts chart into a
//! reconciled [`CountStats`](models::CountStats).

mod catalog;
mod classify;
mod consts;
pub mod error;
mod groups;
pub mod models;
pub mod rows;
mod stats;

use scraper::Html;
use tracing::instrument;

pub use crate::catalog::{EmojiIndex, build_index};
pub use crate::classify::{supports_dual_skin_tone, supports_skin_tone};
pub use crate::groups::group_by_category;
pub use crate::stats::reconcile;
use crate::error::Result;
use crate::models::CountStats;

/// Parses the full emoji list page into the emoji catalog.
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn parse_emoji_page(html: &str) -> Result<EmojiIndex> {
    let document = Html::parse_document(html);
    build_index(&rows::emoji_rows(&document))
}

/// Parses the emoji counts page into reconciled statistics.
///
/// The dual skin tone support count is not present on the counts chart; it
/// is derived from the built catalog and passed in by the caller.
#[instrument(skip(html), fields(html_size = html.len()))]
pub fn parse_counts_page(html: &str, dual_skin_tone_support_count: u64) -> Result<CountStats> {
    let document = Html::parse_document(html);
    let mut stats = reconcile(&rows::count_rows(&document), dual_skin_tone_support_count)?;
    stats.emoji_version = stats::emoji_version(&document);
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMOJI_PAGE: &str = r#"<html><body><table>
        <tr><th>№</th><th>Code</th><th>Name</th><th>Group</th></tr>
        <tr><td class="rchars">1</td><td class="code">U+1F600</td><td class="name">grinning face</td><td class="group">Smileys &amp; Emotion</td></tr>
        <tr><td class="rchars">2</td><td class="code">U+1F91D</td><td class="name">handshake</td><td class="group">People &amp; Body</td></tr>
        <tr><td class="rchars">3</td><td class="code">U+1F3FB</td><td class="name">light skin tone</td><td class="group">Component</td></tr>
    </table></body></html>"#;

    const COUNTS_PAGE: &str = r#"<html><head><title>Emoji Counts, v16.0</title></head><body><table>
        <tr><th>Group</th><th>Count</th></tr>
        <tr><td>Smileys &amp; Emotion</td><td>180</td></tr>
        <tr><td>People &amp; Body</td><td>95</td></tr>
        <tr><td>Component</td><td>10</td></tr>
        <tr><td>With skin tone variations</td><td>25</td></tr>
        <tr><td>Total</td><td>310</td></tr>
    </table></body></html>"#;

    #[test]
    fn emoji_page_end_to_end() {
        let index = parse_emoji_page(EMOJI_PAGE).unwrap();
        // grinning face + light skin tone component, plus handshake with
        // 5 single and 25 dual variants. "light skin tone" itself matches no
        // capability keyword.
        assert_eq!(index.len(), 3 + 5 + 25);
        assert!(!index.get("\u{1F600}").unwrap().skin_tone_support);
        assert!(index.get("\u{1F91D}").unwrap().dual_skin_tone_support);
        assert_eq!(index.dual_support_count(), 1);
        assert_eq!(index.components().len(), 1);
    }

    #[test]
    fn counts_page_end_to_end() {
        let stats = parse_counts_page(COUNTS_PAGE, 1).unwrap();
        assert_eq!(stats.total_without_skin_tone_variations, 275);
        assert_eq!(stats.component_count, 10);
        assert_eq!(stats.dual_skin_tone_support_count, 1);
        assert_eq!(stats.emoji_version.as_deref(), Some("16.0"));
        assert_eq!(stats.last_update, None);
    }

    #[test]
    fn group_aggregation_end_to_end() {
        let index = parse_emoji_page(EMOJI_PAGE).unwrap();
        let groups = group_by_category(&index);
        let names: Vec<&str> = groups.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, vec!["Smileys & Emotion", "People & Body", "Component"]);
    }
}
