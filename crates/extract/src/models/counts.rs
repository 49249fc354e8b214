use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Reconciled statistics derived from the emoji counts chart.
///
/// Invariant: `total_without_skin_tone_variations` equals the chart's grand
/// total minus its skin tone variation count minus its component count. The
/// reconciler refuses to produce this struct when that arithmetic cannot be
/// carried out (see [`ErrorKind`](crate::error::ErrorKind)).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountStats {
    /// Emoji count excluding generated skin tone variations and components.
    pub total_without_skin_tone_variations: u64,
    /// Number of component entries (skin tone modifiers, hair styles, ...).
    pub component_count: u64,
    /// Number of base emojis supporting ordered-pair skin tones; derived
    /// from the built catalog, not from the counts chart.
    pub dual_skin_tone_support_count: u64,
    /// Per-group counts as reported by the chart.
    pub group_counts: BTreeMap<String, u64>,
    /// Version tag scraped from the chart heading, e.g. `"16.0"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji_version: Option<String>,
    /// When this catalog was generated, in milliseconds since the epoch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<u64>,
}
