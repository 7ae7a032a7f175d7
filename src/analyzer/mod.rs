mod modifier;
pub mod segments;

pub use modifier::ModifierAnalyzer;
pub use segments::{Segment, SegmentCategory, StatBreakdown, StatSegments};
