use super::stat_row::StatRowView;
use crate::analyzer::SegmentCategory;

const NAME_WIDTH: usize = 20;
const EMPTY_CELL: char = '░';

fn glyph(category: SegmentCategory) -> char {
    match category {
        SegmentCategory::Base => '█',
        SegmentCategory::Masterwork => '▓',
        SegmentCategory::Modded => '▒',
    }
}

/// Draws the bar as `bar_width` terminal cells.
fn render_bar(row: &StatRowView, bar_width: usize) -> Option<String> {
    let fragments = row.bar.as_ref()?;
    let mut bar = String::new();
    let mut used = 0;
    for fragment in fragments {
        let cells = (fragment.width_percent as usize * bar_width) / 100;
        let cells = cells.min(bar_width - used);
        bar.extend(std::iter::repeat(glyph(fragment.category)).take(cells));
        used += cells;
    }
    bar.extend(std::iter::repeat(EMPTY_CELL).take(bar_width - used));
    Some(bar)
}

/// Renders a stat row as one line of terminal text.
pub fn render_row(row: &StatRowView, bar_width: usize) -> String {
    let mut line = format!("{:<width$} {:>5}", row.name, row.value, width = NAME_WIDTH);

    if let Some(unit) = &row.unit {
        line.push(' ');
        line.push_str(unit);
    }
    if let Some(quality) = &row.quality {
        line.push_str(&format!(" ({})", quality.range));
    }
    if let Some(recoil) = &row.recoil {
        line.push_str(&format!(
            " [{:+.0}° ±{:.0}°]",
            recoil.direction_degrees, recoil.spread_degrees
        ));
    }
    if let Some(bar) = render_bar(row, bar_width.max(1)) {
        line.push_str("  ");
        line.push_str(&bar);
    }

    let mut flags = Vec::new();
    if row.classes.contains(&"masterworked") {
        flags.push("masterworked");
    }
    if row.classes.contains(&"modded") {
        flags.push("modded");
    }
    if !flags.is_empty() {
        line.push_str(&format!("  ({})", flags.join(", ")));
    }

    line
}
