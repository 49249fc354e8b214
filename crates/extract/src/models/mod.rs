mod counts;
mod group;
mod record;
mod tone;

pub use self::counts::CountStats;
pub use self::group::{CategorySummary, GroupMember};
pub use self::record::EmojiRecord;
pub use self::tone::SkinTone;
