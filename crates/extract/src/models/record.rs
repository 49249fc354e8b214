use serde::Serialize;

/// A single entry in the emoji catalog, keyed externally by its character
/// sequence.
///
/// Records are created once during parsing and never mutated afterwards; the
/// whole catalog is rebuilt from scratch on every run. Generated skin tone
/// combinations are ordinary records with `variant` set and `base_emoji`
/// pointing back at the canonical key, which is guaranteed to resolve to a
/// non-variant record in the same catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiRecord {
    /// Display name, e.g. `"handshake (light skin tone)"` for variants.
    pub name: String,
    /// The Unicode group the emoji belongs to, e.g. `"People & Body"`.
    pub group: String,
    /// Whether single skin tone variants exist for this emoji.
    pub skin_tone_support: bool,
    /// Whether ordered-pair skin tone variants exist (handshakes, couples, ...).
    pub dual_skin_tone_support: bool,
    /// `true` for generated tone combinations, `false` for chart rows.
    pub variant: bool,
    /// Canonical key of the base emoji; present only on variants.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_emoji: Option<String>,
    /// The full codepoint sequence, modifiers included.
    pub codepoints: Vec<u32>,
}
