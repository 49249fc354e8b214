use clap::Parser;
use emojicat_fetch::FetchConfig;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "emojicat", version, about = "Scrape the Unicode emoji charts into JSON catalog files")]
pub struct Cli {
    /// Run the built-in pipeline check against fixed fixtures (no network)
    #[arg(long)]
    pub self_test: bool,
    /// Directory the JSON artifacts are written to
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
    /// Refresh even if the existing catalog is recent
    #[arg(long)]
    pub force: bool,
    /// Skip the refresh when the existing catalog is younger than this
    #[arg(long, default_value_t = 30)]
    pub max_age_days: u64,
    /// Per-attempt HTTP timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// Fetch attempts before giving up
    #[arg(long, default_value_t = 3)]
    pub attempts: u32,
    /// Fixed delay between fetch attempts in seconds
    #[arg(long, default_value_t = 2)]
    pub retry_delay_secs: u64,
}

impl Cli {
    pub fn fetch_config(&self) -> FetchConfig {
        FetchConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            attempts: self.attempts,
            delay: Duration::from_secs(self.retry_delay_secs),
        }
    }

    pub fn max_age(&self) -> Duration {
        Duration::from_secs(self.max_age_days * 24 * 60 * 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fetch_config_defaults() {
        let cli = Cli::parse_from(["emojicat"]);
        assert_eq!(cli.fetch_config(), FetchConfig::default());
        assert!(!cli.self_test);
        assert!(!cli.force);
        assert_eq!(cli.out_dir, PathBuf::from("."));
    }

    #[test]
    fn overrides_flow_into_fetch_config() {
        let cli = Cli::parse_from(["emojicat", "--timeout-secs", "5", "--attempts", "1", "--retry-delay-secs", "0"]);
        let config = cli.fetch_config();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.attempts, 1);
        assert_eq!(config.delay, Duration::ZERO);
    }
}
