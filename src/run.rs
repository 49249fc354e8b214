//! The normal-run orchestrator: fetch, parse, build, persist.

use crate::cli::Cli;
use crate::error::{ErrorKind, Result};
use crate::output::write_json;
use crate::refresh;
use emojicat_extract::{group_by_category, parse_counts_page, parse_emoji_page};
use emojicat_fetch::FetchClient;
use tracing::info;

/// The full emoji list chart (one row per emoji, semantic cell classes).
pub const EMOJI_LIST_URL: &str = "https://unicode.org/emoji/charts/full-emoji-list.html";
/// The emoji counts chart (label/count rows).
pub const EMOJI_COUNTS_URL: &str = "https://unicode.org/emoji/charts/emoji-counts.html";

/// Runs the whole pipeline once:
/// refresh check, fetch both charts, parse, derive, persist.
///
/// Output artifacts are independent; whatever was written before a failure
/// stays on disk. In particular the catalog artifacts land before count
/// reconciliation runs, so a counts-chart integrity failure never leaves a
/// stats file behind but does leave a usable catalog.
pub async fn run(cli: &Cli) -> Result<()> {
    let stats_path = cli.out_dir.join("test").join("stats.json");
    if !cli.force {
        let last = refresh::last_update(&stats_path).await;
        if !refresh::refresh_due(last, cli.max_age(), refresh::now_ms()) {
            info!(max_age_days = cli.max_age_days, "catalog is up to date, nothing to do");
            return Ok(());
        }
    }

    let client = FetchClient::new(cli.fetch_config()).map_err(ErrorKind::fetch)?;
    let emoji_html = client.get_text(EMOJI_LIST_URL).await.map_err(ErrorKind::fetch)?;
    let counts_html = client.get_text(EMOJI_COUNTS_URL).await.map_err(ErrorKind::fetch)?;

    let index = parse_emoji_page(&emoji_html).map_err(ErrorKind::extract)?;
    info!(emoji_count = index.len(), "built emoji catalog");

    write_json(cli.out_dir.join("data-by-emoji.json"), &index).await?;
    write_json(cli.out_dir.join("data-by-group.json"), &group_by_category(&index)).await?;
    write_json(cli.out_dir.join("data-ordered-emoji.json"), &index.ordered_keys()).await?;
    write_json(cli.out_dir.join("data-emoji-components.json"), &index.components()).await?;

    let mut stats = parse_counts_page(&counts_html, index.dual_support_count()).map_err(ErrorKind::extract)?;
    stats.last_update = Some(refresh::now_ms());
    write_json(&stats_path, &stats).await?;

    info!(
        total = stats.total_without_skin_tone_variations,
        version = stats.emoji_version.as_deref().unwrap_or("unknown"),
        "catalog refreshed"
    );
    Ok(())
}
