pub mod analyzer;
pub mod config;
pub mod data;
pub mod errors;
pub mod models;
pub mod render;

pub use analyzer::{ModifierAnalyzer, Segment, SegmentCategory, StatBreakdown, StatSegments};
pub use data::{EnglishTranslations, StatMetadata, Translator};
pub use errors::{Result, StatRowError};
pub use models::{Item, ItemStatsDocument, Socket, Stat, StatHash};
pub use render::{OutputFormat, StatRowView};
