use regex::Regex;
use scraper::Selector;
use std::sync::LazyLock;

macro_rules! selector {
    ($name:ident, $css:expr) => {
        pub(crate) static $name: LazyLock<Selector> = LazyLock::new(|| Selector::parse($css).unwrap());
    };
}

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

selector!(ROW_SELECTOR, "tr");
// Semantic cell classes used by the full emoji list chart.
selector!(CODE_CELL_SELECTOR, "td.code");
selector!(NAME_CELL_SELECTOR, "td.name");
selector!(GROUP_CELL_SELECTOR, "td.group");
// The counts chart carries no cell classes; position is all we get.
selector!(CELL_SELECTOR, "td, th");
selector!(HEADING_SELECTOR, "title, h1");
// Version tag as it appears in the chart headings, e.g. "Emoji Counts, v16.0".
regex!(VERSION_REGEX, r"\bv(\d+\.\d+)");
