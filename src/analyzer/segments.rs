use serde::{Deserialize, Serialize};

use super::modifier::ModifierAnalyzer;
use crate::data::StatMetadata;
use crate::models::{Item, Stat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentCategory {
    Base,
    Masterwork,
    Modded,
}

impl SegmentCategory {
    /// Style class for the bar fragment. Base fragments carry none.
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            SegmentCategory::Base => None,
            SegmentCategory::Masterwork => Some("masterwork-stats"),
            SegmentCategory::Modded => Some("modded-stats"),
        }
    }
}

/// One portion of a stat bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub magnitude: i32,
    pub category: SegmentCategory,
}

/// Ordered bar segments for one stat: base, then masterwork, then mods.
///
/// Widths are left to the renderer; nothing here divides by `maximum_value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSegments {
    pub maximum_value: i32,
    pub segments: Vec<Segment>,
}

impl StatSegments {
    /// Splits `total` into the part the item rolled with and the parts added on top.
    ///
    /// The masterwork bonus only counts when `is_masterwork_stat` and it is
    /// positive; the mod bonus counts whenever it is non-zero. The base keeps
    /// whatever is left, which goes negative if the bonuses exceed the total.
    /// Arithmetic saturates at the `i32` bounds rather than overflowing.
    pub fn decompose(
        total: i32,
        maximum_value: i32,
        masterwork_bonus: i32,
        mod_bonus: i32,
        is_masterwork_stat: bool,
    ) -> Self {
        let masterworked = is_masterwork_stat && masterwork_bonus > 0;
        let modded = mod_bonus != 0;

        let mut base = total;
        if masterworked {
            base = base.saturating_sub(masterwork_bonus);
        }
        if modded {
            base = base.saturating_sub(mod_bonus);
        }

        let mut segments = vec![Segment {
            magnitude: base,
            category: SegmentCategory::Base,
        }];
        if masterworked {
            segments.push(Segment {
                magnitude: masterwork_bonus,
                category: SegmentCategory::Masterwork,
            });
        }
        if modded {
            segments.push(Segment {
                magnitude: mod_bonus,
                category: SegmentCategory::Modded,
            });
        }

        Self {
            maximum_value,
            segments,
        }
    }

    pub fn base(&self) -> i32 {
        self.segments
            .iter()
            .find(|s| s.category == SegmentCategory::Base)
            .map(|s| s.magnitude)
            .unwrap_or(0)
    }

    pub fn total(&self) -> i32 {
        self.segments
            .iter()
            .fold(0i32, |total, s| total.saturating_add(s.magnitude))
    }

    pub fn has(&self, category: SegmentCategory) -> bool {
        self.segments.iter().any(|s| s.category == category)
    }
}

/// Everything derived from a stat and its item before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBreakdown {
    /// The item's masterwork targets this stat, whether or not the bonus is positive.
    pub is_masterworked_stat: bool,
    pub is_modded_stat: bool,
    pub masterwork_value: i32,
    pub modded_value: i32,
    pub segments: StatSegments,
}

impl StatBreakdown {
    pub fn for_stat(item: &Item, stat: &Stat, metadata: &StatMetadata) -> Self {
        let masterwork = item.masterwork_info();
        let is_masterworked_stat = masterwork.is_some_and(|mw| mw.stat_hash == stat.stat_hash);
        let masterwork_value = masterwork.map(|mw| mw.stat_value).unwrap_or(0);

        let modded_value = ModifierAnalyzer::new(metadata).modded_stat_value(item, stat);

        let segments = StatSegments::decompose(
            stat.value,
            stat.maximum_value,
            masterwork_value,
            modded_value,
            is_masterworked_stat,
        );

        tracing::debug!(
            stat = %stat.stat_hash,
            value = stat.value,
            base = segments.base(),
            masterwork = masterwork_value,
            modded = modded_value,
            "decomposed stat"
        );
        if segments.base() < 0 {
            tracing::warn!(
                stat = %stat.stat_hash,
                item = item.id(),
                base = segments.base(),
                "stat bonuses exceed the displayed value"
            );
        }

        Self {
            is_masterworked_stat,
            is_modded_stat: modded_value != 0,
            masterwork_value,
            modded_value,
            segments,
        }
    }
}
