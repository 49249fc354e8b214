//! Group aggregation over the built catalog.

use crate::catalog::EmojiIndex;
use crate::models::{CategorySummary, GroupMember};
use std::collections::HashMap;

/// Groups non-variant records by their Unicode group, preserving first-seen
/// chart order for both the groups and their members.
///
/// Generated tone variants never appear here; they are reachable through
/// their base emoji's record.
pub fn group_by_category(index: &EmojiIndex) -> Vec<CategorySummary> {
    let mut order: Vec<String> = Vec::new();
    let mut buckets: HashMap<String, Vec<GroupMember>> = HashMap::new();
    for (emoji, record) in index.iter() {
        if record.variant {
            continue;
        }
        if !buckets.contains_key(&record.group) {
            order.push(record.group.clone());
        }
        buckets.entry(record.group.clone()).or_default().push(GroupMember {
            emoji: emoji.to_string(),
            name: record.name.clone(),
            skin_tone_support: record.skin_tone_support,
            dual_skin_tone_support: record.dual_skin_tone_support,
        });
    }
    order
        .into_iter()
        .map(|name| {
            let emojis = buckets.remove(&name).unwrap_or_default();
            CategorySummary { name, emojis }
        })
        .collect()
}
