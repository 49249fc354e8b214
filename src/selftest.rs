//! Self-test mode: the same parse/build pipeline over fixed inline
//! fixtures, with exact expected outcomes. No network, no filesystem.

use crate::error::{ErrorKind, Result};
use emojicat_extract::models::SkinTone;
use emojicat_extract::{group_by_category, parse_counts_page, parse_emoji_page};
use tracing::info;

const EMOJI_FIXTURE: &str = r#"<html><body><table>
    <tr><th>№</th><th>Code</th><th>Name</th><th>Group</th></tr>
    <tr><td class="rchars">1</td><td class="code">U+1F600</td><td class="name">grinning face</td><td class="group">Smileys &amp; Emotion</td></tr>
    <tr><td class="rchars">2</td><td class="code">U+1F91D</td><td class="name">handshake</td><td class="group">People &amp; Body</td></tr>
</table></body></html>"#;

const COUNTS_FIXTURE: &str = r#"<html><head><title>Emoji Counts, v16.0</title></head><body><table>
    <tr><th>Group</th><th>Count</th></tr>
    <tr><td>Smileys &amp; Emotion</td><td>180</td></tr>
    <tr><td>People &amp; Body</td><td>95</td></tr>
    <tr><td>Component</td><td>10</td></tr>
    <tr><td>With skin tone variations</td><td>25</td></tr>
    <tr><td>Total</td><td>310</td></tr>
</table></body></html>"#;

const COUNTS_FIXTURE_NO_TOTAL: &str = r#"<html><body><table>
    <tr><th>Group</th><th>Count</th></tr>
    <tr><td>With skin tone variations</td><td>25</td></tr>
</table></body></html>"#;

fn ensure(condition: bool, detail: impl Into<String>) -> Result<()> {
    if !condition {
        exn::bail!(ErrorKind::SelfTest(detail.into()));
    }
    Ok(())
}

/// Runs every check; the first mismatch aborts with details and a non-zero
/// process exit.
pub fn run() -> Result<()> {
    catalog_checks()?;
    group_checks()?;
    counts_checks()?;
    info!("self-test passed");
    Ok(())
}

fn catalog_checks() -> Result<()> {
    let index = parse_emoji_page(EMOJI_FIXTURE).map_err(ErrorKind::extract)?;
    // 2 bases + 5 single-tone + 25 dual-tone handshake variants.
    ensure(index.len() == 32, format!("expected 32 catalog entries, got {}", index.len()))?;

    let grinning = index.get("\u{1F600}").ok_or_else(|| ErrorKind::SelfTest("grinning face missing".into()))?;
    ensure(!grinning.skin_tone_support, "grinning face must not support skin tones")?;
    ensure(!grinning.dual_skin_tone_support, "grinning face must not support dual skin tones")?;
    ensure(!grinning.variant, "grinning face is not a variant")?;
    ensure(grinning.codepoints == vec![0x1F600], "grinning face codepoints")?;

    let handshake = index.get("\u{1F91D}").ok_or_else(|| ErrorKind::SelfTest("handshake missing".into()))?;
    ensure(handshake.skin_tone_support, "handshake must support skin tones")?;
    ensure(handshake.dual_skin_tone_support, "handshake must support dual skin tones")?;

    for tone in SkinTone::ALL {
        let key = format!("\u{1F91D}{}", tone.as_char());
        let variant = index.get(&key).ok_or_else(|| ErrorKind::SelfTest(format!("missing variant for {tone}")))?;
        ensure(variant.variant, format!("{tone} variant must be flagged"))?;
        ensure(variant.name == format!("handshake ({tone})"), format!("bad single variant name: {}", variant.name))?;
        ensure(variant.base_emoji.as_deref() == Some("\u{1F91D}"), "single variant must reference its base")?;
        ensure(variant.codepoints == vec![0x1F91D, tone.codepoint()], "single variant codepoints")?;
    }

    let light_dark = index
        .get("\u{1F91D}\u{1F3FB}\u{1F3FF}")
        .ok_or_else(|| ErrorKind::SelfTest("light/dark handshake variant missing".into()))?;
    ensure(
        light_dark.name == "handshake (light skin tone and dark skin tone)",
        format!("bad dual variant name: {}", light_dark.name),
    )?;
    ensure(light_dark.codepoints == vec![0x1F91D, 0x1F3FB, 0x1F3FF], "dual variant codepoints")?;

    let dual_variants = index
        .ordered_keys()
        .iter()
        .filter(|key| key.starts_with("\u{1F91D}") && key.chars().count() == 3)
        .count();
    ensure(dual_variants == 25, format!("expected 25 dual variants, got {dual_variants}"))?;

    // Sorting is deterministic: sorting the sorted list changes nothing.
    let once = index.ordered_keys();
    let mut twice = once.clone();
    twice.sort_unstable();
    ensure(once == twice, "ordered key sort must be idempotent")?;
    Ok(())
}

fn group_checks() -> Result<()> {
    let index = parse_emoji_page(EMOJI_FIXTURE).map_err(ErrorKind::extract)?;
    let groups = group_by_category(&index);
    ensure(groups.len() == 2, format!("expected 2 groups, got {}", groups.len()))?;
    ensure(groups[0].name == "Smileys & Emotion", "first-seen group order")?;
    ensure(groups[1].name == "People & Body", "first-seen group order")?;
    ensure(
        groups.iter().all(|group| group.emojis.len() == 1),
        "groups must list base emojis only, no generated variants",
    )?;
    Ok(())
}

fn counts_checks() -> Result<()> {
    let stats = parse_counts_page(COUNTS_FIXTURE, 1).map_err(ErrorKind::extract)?;
    ensure(
        stats.total_without_skin_tone_variations == 275,
        format!("expected 310 - 25 - 10 = 275, got {}", stats.total_without_skin_tone_variations),
    )?;
    ensure(stats.component_count == 10, "component count")?;
    ensure(stats.dual_skin_tone_support_count == 1, "dual support count")?;
    ensure(stats.group_counts.len() == 2, "two group counts")?;
    ensure(stats.group_counts.get("Smileys & Emotion") == Some(&180), "Smileys & Emotion count")?;
    ensure(stats.emoji_version.as_deref() == Some("16.0"), "version tag")?;

    ensure(
        parse_counts_page(COUNTS_FIXTURE_NO_TOTAL, 0).is_err(),
        "reconciliation without a Total row must fail, not return zero",
    )?;
    Ok(())
}
