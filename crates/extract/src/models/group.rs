use serde::Serialize;

/// One Unicode group and its member emojis, in chart order.
///
/// Members are always base emojis; generated tone variants are reachable
/// through their base record and are deliberately left out here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// Group name, e.g. `"Smileys & Emotion"`.
    pub name: String,
    /// Member entries in first-seen chart order.
    pub emojis: Vec<GroupMember>,
}

/// The slice of an [`EmojiRecord`](super::EmojiRecord) that group listings
/// carry: key, name and the two capability flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupMember {
    /// The emoji character sequence (catalog key).
    pub emoji: String,
    pub name: String,
    pub skin_tone_support: bool,
    pub dual_skin_tone_support: bool,
}
