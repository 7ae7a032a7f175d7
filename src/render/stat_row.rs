use serde::Serialize;

use super::filters::{bar_width_percent, quality_color};
use super::recoil::RecoilGeometry;
use crate::analyzer::{SegmentCategory, StatBreakdown};
use crate::data::translations::MILLISECONDS_KEY;
use crate::data::{StatMetadata, Translator};
use crate::models::{Item, Stat};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityBadge {
    pub range: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarFragment {
    pub category: SegmentCategory,
    pub magnitude: i32,
    pub width_percent: u32,
}

/// Display tree for one stat line, ready for any of the output back-ends.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatRowView {
    pub classes: Vec<&'static str>,
    pub title: String,
    pub name: String,
    pub value: String,
    pub unit: Option<String>,
    pub icon: Option<String>,
    pub quality: Option<QualityBadge>,
    pub recoil: Option<RecoilGeometry>,
    pub bar: Option<Vec<BarFragment>>,
}

impl StatRowView {
    pub fn build(
        stat: &Stat,
        item: &Item,
        metadata: &StatMetadata,
        translator: &dyn Translator,
    ) -> Self {
        let breakdown = StatBreakdown::for_stat(item, stat, metadata);

        let mut classes = vec!["stat-box-row"];
        if breakdown.is_masterworked_stat {
            classes.push("masterworked");
        }
        if breakdown.is_modded_stat {
            classes.push("modded");
        }

        let value = if stat.additive {
            format!("+{}", stat.value)
        } else {
            stat.value.to_string()
        };

        let unit = metadata
            .is_millisecond_stat(stat.stat_hash)
            .then(|| translator.t(MILLISECONDS_KEY).into_owned());

        let icon = stat
            .display_properties
            .has_icon
            .then(|| stat.display_properties.icon.clone());

        // Quality percentages only exist on older items.
        let quality = if item.is_destiny1() {
            stat.positive_quality().map(|q| QualityBadge {
                range: q.range.clone(),
                color: quality_color(q.min),
            })
        } else {
            None
        };

        let recoil = metadata
            .is_recoil_direction(stat.stat_hash)
            .then(|| RecoilGeometry::from_stat_value(stat.value));

        let bar = if stat.bar {
            bar_fragments(&breakdown, stat)
        } else {
            None
        };

        Self {
            classes,
            title: stat.display_properties.description.clone(),
            name: stat.display_properties.name.clone(),
            value,
            unit,
            icon,
            quality,
            recoil,
            bar,
        }
    }
}

fn bar_fragments(breakdown: &StatBreakdown, stat: &Stat) -> Option<Vec<BarFragment>> {
    let maximum = breakdown.segments.maximum_value;
    if maximum <= 0 {
        tracing::warn!(stat = %stat.stat_hash, "bar stat has no maximum value, skipping bar");
        return None;
    }

    breakdown
        .segments
        .segments
        .iter()
        .map(|segment| {
            bar_width_percent(segment.magnitude, maximum).map(|width_percent| BarFragment {
                category: segment.category,
                magnitude: segment.magnitude,
                width_percent,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::definitions::{ARMOR_MODS_CATEGORY, DRAW_TIME_STAT, RECOIL_DIRECTION_STAT};
    use crate::data::EnglishTranslations;
    use crate::models::{Socket, StatHash};

    const STABILITY: StatHash = StatHash(155624089);

    fn build(stat: &Stat, item: &Item) -> StatRowView {
        StatRowView::build(stat, item, &StatMetadata::default(), &EnglishTranslations::new())
    }

    #[test]
    fn test_plain_row() {
        let stat = Stat::new(STABILITY, "Stability", 45);
        let row = build(&stat, &Item::destiny2("w".to_string()));

        assert_eq!(row.classes, vec!["stat-box-row"]);
        assert_eq!(row.name, "Stability");
        assert_eq!(row.value, "45");
        assert!(row.unit.is_none());
        assert!(row.recoil.is_none());

        let bar = row.bar.unwrap();
        assert_eq!(bar.len(), 1);
        assert_eq!(bar[0].width_percent, 45);
        assert_eq!(bar[0].category, SegmentCategory::Base);
    }

    #[test]
    fn test_masterworked_and_modded_row() {
        let mut item = Item::destiny2("w".to_string()).with_masterwork(STABILITY, 10);
        item.add_socket(Socket::with_plug(&[ARMOR_MODS_CATEGORY], &[(STABILITY, 5)]));
        let stat = Stat::new(STABILITY, "Stability", 65);

        let row = build(&stat, &item);

        assert_eq!(row.classes, vec!["stat-box-row", "masterworked", "modded"]);
        let widths: Vec<_> = row.bar.unwrap().iter().map(|f| f.width_percent).collect();
        assert_eq!(widths, vec![50, 10, 5]);
    }

    #[test]
    fn test_additive_value_and_millisecond_unit() {
        let mut stat = Stat::new(DRAW_TIME_STAT, "Draw Time", 560);
        stat.additive = true;
        stat.bar = false;

        let row = build(&stat, &Item::destiny2("bow".to_string()));

        assert_eq!(row.value, "+560");
        assert_eq!(row.unit.as_deref(), Some("ms"));
        assert!(row.bar.is_none());
    }

    #[test]
    fn test_icon_only_when_flagged() {
        let mut stat = Stat::new(STABILITY, "Stability", 45);
        stat.display_properties.icon = "/common/icons/stability.png".to_string();
        assert!(build(&stat, &Item::destiny2("w".to_string())).icon.is_none());

        stat.display_properties.has_icon = true;
        assert_eq!(
            build(&stat, &Item::destiny2("w".to_string())).icon.as_deref(),
            Some("/common/icons/stability.png")
        );
    }

    #[test]
    fn test_quality_badge_only_for_legacy_items() {
        let stat = Stat::new(StatHash(144602215), "Intellect", 50).with_quality(92, "92%-100%");

        let row = build(&stat, &Item::destiny1("old".to_string()));
        let badge = row.quality.unwrap();
        assert_eq!(badge.range, "92%-100%");
        assert_eq!(badge.color, "hsla(60,65%,50%, 1)");

        assert!(build(&stat, &Item::destiny2("new".to_string())).quality.is_none());

        let zero = stat.clone().with_quality(0, "0%-3%");
        assert!(build(&zero, &Item::destiny1("old".to_string())).quality.is_none());
    }

    #[test]
    fn test_recoil_visualization_only_for_recoil_stat() {
        let stat = Stat::new(RECOIL_DIRECTION_STAT, "Recoil Direction", 75);
        let row = build(&stat, &Item::destiny2("w".to_string()));
        assert!(row.recoil.is_some());
    }

    #[test]
    fn test_zero_maximum_renders_no_bar() {
        let stat = Stat::new(STABILITY, "Stability", 45).with_maximum(0);
        let row = build(&stat, &Item::destiny2("w".to_string()));
        assert!(row.bar.is_none());
    }
}
