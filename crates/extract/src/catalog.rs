//! Catalog construction: chart rows in, keyed emoji records out.
//!
//! This is where tone-capable emojis are expanded into their generated
//! variants: five single-tone records per capable base, and twenty-five
//! ordered-pair records on top for dual-capable bases.

use crate::classify::{supports_dual_skin_tone, supports_skin_tone};
use crate::error::{ErrorKind, Result};
use crate::models::{EmojiRecord, SkinTone};
use crate::rows::EmojiRow;
use exn::{OptionExt, ResultExt};
use std::collections::HashMap;
use tracing::instrument;

/// The emoji catalog: a mapping from emoji character sequence to its record,
/// remembering first-seen key order.
///
/// Chart order matters downstream (group listings preserve it), so lookups
/// go through the map while iteration follows insertion order. A key emitted
/// by two different chart rows keeps its original position but takes the
/// later row's record (last-write-wins).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiIndex {
    records: HashMap<String, EmojiRecord>,
    order: Vec<String>,
}

impl EmojiIndex {
    fn insert(&mut self, emoji: String, record: EmojiRecord) {
        if !self.records.contains_key(&emoji) {
            self.order.push(emoji.clone());
        }
        self.records.insert(emoji, record);
    }

    pub fn get(&self, emoji: &str) -> Option<&EmojiRecord> {
        self.records.get(emoji)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates entries in first-seen chart order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EmojiRecord)> {
        self.order.iter().filter_map(|key| self.records.get(key).map(|record| (key.as_str(), record)))
    }

    /// All catalog keys (bases and variants), lexicographically sorted.
    /// The sort is deterministic, so re-sorting its own output is a no-op.
    pub fn ordered_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.records.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// The subset catalog of component entries (skin tone modifiers, hair
    /// styles, ...), preserving chart order.
    pub fn components(&self) -> EmojiIndex {
        let mut subset = EmojiIndex::default();
        for (emoji, record) in self.iter() {
            if record.group == "Component" {
                subset.insert(emoji.to_string(), record.clone());
            }
        }
        subset
    }

    /// Number of base emojis with ordered-pair skin tone support.
    pub fn dual_support_count(&self) -> u64 {
        self.iter().filter(|(_, record)| !record.variant && record.dual_skin_tone_support).count() as u64
    }
}

/// Serializes as a JSON object in first-seen chart order.
impl serde::Serialize for EmojiIndex {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (emoji, record) in self.iter() {
            map.serialize_entry(emoji, record)?;
        }
        map.end()
    }
}

/// Parses the codepoint column: whitespace-separated hex values, with or
/// without the `U+` prefix the chart uses.
fn parse_codepoints(code: &str) -> Result<Vec<u32>> {
    code.split_whitespace()
        .map(|token| {
            u32::from_str_radix(token.trim_start_matches("U+"), 16).or_raise(|| ErrorKind::ParseError {
                field: "codepoints",
                value: token.to_string(),
            })
        })
        .collect()
}

fn sequence_from(codepoints: &[u32]) -> Result<String> {
    codepoints
        .iter()
        .map(|&cp| {
            char::from_u32(cp).ok_or_raise(|| ErrorKind::ParseError {
                field: "codepoints",
                value: format!("{cp:X} is not a Unicode scalar value"),
            })
        })
        .collect()
}

/// Builds the full catalog from emoji chart rows.
///
/// A row with an unparsable codepoint field aborts the whole build: it means
/// the chart's format changed and silently dropping rows would produce a
/// catalog that looks complete but isn't.
#[instrument(skip(rows), fields(row_count = rows.len()))]
pub fn build_index(rows: &[EmojiRow]) -> Result<EmojiIndex> {
    let mut index = EmojiIndex::default();
    for row in rows {
        let codepoints = parse_codepoints(&row.code)?;
        let emoji = sequence_from(&codepoints)?;
        let dual_skin_tone_support = supports_dual_skin_tone(&row.name);
        let skin_tone_support = dual_skin_tone_support || supports_skin_tone(&row.name);
        index.insert(
            emoji.clone(),
            EmojiRecord {
                name: row.name.clone(),
                group: row.group.clone(),
                skin_tone_support,
                dual_skin_tone_support,
                variant: false,
                base_emoji: None,
                codepoints: codepoints.clone(),
            },
        );
        if skin_tone_support {
            for tone in SkinTone::ALL {
                index.insert(
                    variant_key(&emoji, &[tone]),
                    variant_record(row, &emoji, &codepoints, &[tone], format!("{} ({})", row.name, tone)),
                );
            }
        }
        if dual_skin_tone_support {
            for first in SkinTone::ALL {
                for second in SkinTone::ALL {
                    index.insert(
                        variant_key(&emoji, &[first, second]),
                        variant_record(
                            row,
                            &emoji,
                            &codepoints,
                            &[first, second],
                            format!("{} ({} and {})", row.name, first, second),
                        ),
                    );
                }
            }
        }
    }
    Ok(index)
}

fn variant_key(base: &str, tones: &[SkinTone]) -> String {
    let mut key = base.to_string();
    key.extend(tones.iter().map(|tone| tone.as_char()));
    key
}

fn variant_record(row: &EmojiRow, base: &str, codepoints: &[u32], tones: &[SkinTone], name: String) -> EmojiRecord {
    let mut full = codepoints.to_vec();
    full.extend(tones.iter().map(|tone| tone.codepoint()));
    EmojiRecord {
        name,
        group: row.group.clone(),
        skin_tone_support: true,
        dual_skin_tone_support: tones.len() == 2,
        variant: true,
        base_emoji: Some(base.to_string()),
        codepoints: full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(code: &str, name: &str, group: &str) -> EmojiRow {
        EmojiRow { code: code.into(), name: name.into(), group: group.into() }
    }

    #[test]
    fn plain_emoji_gets_no_variants() {
        let index = build_index(&[row("1F600", "grinning face", "Smileys & Emotion")]).unwrap();
        assert_eq!(index.len(), 1);
        let record = index.get("\u{1F600}").unwrap();
        assert_eq!(record.name, "grinning face");
        assert_eq!(record.group, "Smileys & Emotion");
        assert!(!record.skin_tone_support);
        assert!(!record.dual_skin_tone_support);
        assert!(!record.variant);
        assert_eq!(record.base_emoji, None);
        assert_eq!(record.codepoints, vec![0x1F600]);
    }

    #[test]
    fn tone_capable_emoji_gets_five_variants() {
        let index = build_index(&[row("U+1F44B", "waving hand", "People & Body")]).unwrap();
        assert_eq!(index.len(), 6);
        let base = index.get("\u{1F44B}").unwrap();
        assert!(base.skin_tone_support);
        assert!(!base.dual_skin_tone_support);
        for tone in SkinTone::ALL {
            let key = format!("\u{1F44B}{}", tone.as_char());
            let variant = index.get(&key).unwrap();
            assert!(variant.variant);
            assert_eq!(variant.name, format!("waving hand ({tone})"));
            assert_eq!(variant.base_emoji.as_deref(), Some("\u{1F44B}"));
            assert_eq!(variant.codepoints, vec![0x1F44B, tone.codepoint()]);
        }
    }

    #[test]
    fn dual_capable_emoji_gets_thirty_variants() {
        let index = build_index(&[row("1F91D", "handshake", "People & Body")]).unwrap();
        // 1 base + 5 singles + 25 ordered pairs.
        assert_eq!(index.len(), 31);
        let base = index.get("\u{1F91D}").unwrap();
        assert!(base.skin_tone_support);
        assert!(base.dual_skin_tone_support);
        let variant = index.get("\u{1F91D}\u{1F3FB}\u{1F3FF}").unwrap();
        assert_eq!(variant.name, "handshake (light skin tone and dark skin tone)");
        assert_eq!(variant.codepoints, vec![0x1F91D, 0x1F3FB, 0x1F3FF]);
        assert_eq!(variant.base_emoji.as_deref(), Some("\u{1F91D}"));
        // Same-modifier pairs are included.
        assert!(index.get("\u{1F91D}\u{1F3FD}\u{1F3FD}").is_some());
    }

    #[test]
    fn every_variant_back_reference_resolves() {
        let index = build_index(&[
            row("1F91D", "handshake", "People & Body"),
            row("1F44B", "waving hand", "People & Body"),
        ])
        .unwrap();
        for (_, record) in index.iter() {
            if let Some(base) = &record.base_emoji {
                let target = index.get(base).expect("base emoji must exist");
                assert!(!target.variant);
            } else {
                assert!(!record.variant);
            }
        }
    }

    #[test]
    fn multi_codepoint_sequences_decode() {
        let index = build_index(&[row("1F468 200D 1F373", "man cook", "People & Body")]).unwrap();
        let base = index.get("\u{1F468}\u{200D}\u{1F373}").unwrap();
        assert_eq!(base.codepoints, vec![0x1F468, 0x200D, 0x1F373]);
    }

    #[test]
    fn duplicate_key_is_last_write_wins() {
        let index = build_index(&[
            row("1F600", "grinning face", "Smileys & Emotion"),
            row("1F600", "grinning face (revised)", "Smileys & Emotion"),
        ])
        .unwrap();
        assert_eq!(index.len(), 1);
        assert_eq!(index.get("\u{1F600}").unwrap().name, "grinning face (revised)");
    }

    #[test]
    fn non_hex_codepoint_is_fatal() {
        let err = build_index(&[row("1F600 GARBAGE", "grinning face", "Smileys & Emotion")]).unwrap_err();
        assert!(matches!(*err, ErrorKind::ParseError { field: "codepoints", .. }));
    }

    #[test]
    fn surrogate_codepoint_is_fatal() {
        let err = build_index(&[row("D800", "bogus", "Smileys & Emotion")]).unwrap_err();
        assert!(matches!(*err, ErrorKind::ParseError { field: "codepoints", .. }));
    }

    #[test]
    fn ordered_keys_sort_is_idempotent() {
        let index = build_index(&[
            row("1F91D", "handshake", "People & Body"),
            row("1F600", "grinning face", "Smileys & Emotion"),
        ])
        .unwrap();
        let once = index.ordered_keys();
        let mut twice = once.clone();
        twice.sort_unstable();
        assert_eq!(once, twice);
        assert_eq!(once.len(), index.len());
    }

    #[test]
    fn components_subset_keeps_only_component_group() {
        let index = build_index(&[
            row("1F600", "grinning face", "Smileys & Emotion"),
            row("1F3FB", "light skin tone", "Component"),
            row("1F9B0", "red hair", "Component"),
        ])
        .unwrap();
        let components = index.components();
        assert_eq!(components.len(), 2);
        assert!(components.get("\u{1F3FB}").is_some());
        assert!(components.get("\u{1F600}").is_none());
    }

    #[test]
    fn serializes_as_object_in_chart_order() {
        let index = build_index(&[
            row("1F91D", "handshake", "People & Body"),
            row("1F600", "grinning face", "Smileys & Emotion"),
        ])
        .unwrap();
        let json = serde_json::to_string(&index).unwrap();
        // The handshake row came first in the chart, so it serializes first.
        assert!(json.find("handshake").unwrap() < json.find("grinning face").unwrap());
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value.as_object().unwrap().len(), index.len());
        assert_eq!(value["\u{1F600}"]["name"], "grinning face");
        // Non-variant records carry no base_emoji key at all.
        assert!(value["\u{1F600}"].get("base_emoji").is_none());
    }
}
