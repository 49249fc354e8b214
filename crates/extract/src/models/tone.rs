use std::fmt::{Display, Formatter, Result as FmtResult};

/// The five fixed Unicode skin tone modifiers (Fitzpatrick types 1-2 to 6).
///
/// Each modifier is a single combining codepoint in U+1F3FB..=U+1F3FF that,
/// appended to a capable emoji sequence, changes its rendered skin tone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkinTone {
    /// U+1F3FB
    Light,
    /// U+1F3FC
    MediumLight,
    /// U+1F3FD
    Medium,
    /// U+1F3FE
    MediumDark,
    /// U+1F3FF
    Dark,
}

impl SkinTone {
    /// All modifiers in codepoint order. Variant generation iterates this,
    /// so the order here is the order variants appear in the catalog.
    pub const ALL: [SkinTone; 5] =
        [SkinTone::Light, SkinTone::MediumLight, SkinTone::Medium, SkinTone::MediumDark, SkinTone::Dark];

    /// The modifier's Unicode codepoint.
    pub fn codepoint(self) -> u32 {
        match self {
            SkinTone::Light => 0x1F3FB,
            SkinTone::MediumLight => 0x1F3FC,
            SkinTone::Medium => 0x1F3FD,
            SkinTone::MediumDark => 0x1F3FE,
            SkinTone::Dark => 0x1F3FF,
        }
    }

    /// The modifier as a character, for appending to an emoji sequence.
    pub fn as_char(self) -> char {
        match self {
            SkinTone::Light => '\u{1F3FB}',
            SkinTone::MediumLight => '\u{1F3FC}',
            SkinTone::Medium => '\u{1F3FD}',
            SkinTone::MediumDark => '\u{1F3FE}',
            SkinTone::Dark => '\u{1F3FF}',
        }
    }

    /// Display name as used in generated variant names,
    /// e.g. `"handshake (light skin tone)"`.
    pub fn as_str(self) -> &'static str {
        match self {
            SkinTone::Light => "light skin tone",
            SkinTone::MediumLight => "medium-light skin tone",
            SkinTone::Medium => "medium skin tone",
            SkinTone::MediumDark => "medium-dark skin tone",
            SkinTone::Dark => "dark skin tone",
        }
    }
}

impl Display for SkinTone {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codepoints_match_chars() {
        for tone in SkinTone::ALL {
            assert_eq!(tone.as_char() as u32, tone.codepoint());
        }
    }

    #[test]
    fn all_is_ordered_and_distinct() {
        let codepoints: Vec<u32> = SkinTone::ALL.iter().map(|t| t.codepoint()).collect();
        assert_eq!(codepoints, vec![0x1F3FB, 0x1F3FC, 0x1F3FD, 0x1F3FE, 0x1F3FF]);
    }
}
