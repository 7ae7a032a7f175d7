/// Width of a bar fragment as a whole percentage of the stat's maximum.
///
/// Returns `None` when the maximum is not positive: such stats get no bar.
/// Fragments never overflow the bar or go below zero width.
pub fn bar_width_percent(magnitude: i32, maximum_value: i32) -> Option<u32> {
    if maximum_value <= 0 {
        return None;
    }
    let ratio = f64::from(magnitude) / f64::from(maximum_value);
    let percent = (100.0 * ratio).floor().clamp(0.0, 100.0);
    Some(percent as u32)
}

/// Colour for a quality percentage: red for poor rolls through blue for perfect ones.
pub fn quality_color(value: i32) -> String {
    if value < 0 {
        return "white".to_string();
    }
    let hue = match value {
        0..=85 => 0,
        86..=90 => 20,
        91..=95 => 60,
        96..=99 => 120,
        _ => 190,
    };
    format!("hsla({},65%,50%, 1)", hue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_floors_and_clamps() {
        assert_eq!(bar_width_percent(100, 100), Some(100));
        assert_eq!(bar_width_percent(20, 100), Some(20));
        assert_eq!(bar_width_percent(1, 3), Some(33));
        assert_eq!(bar_width_percent(150, 100), Some(100));
        assert_eq!(bar_width_percent(-5, 100), Some(0));
    }

    #[test]
    fn test_zero_maximum_has_no_width() {
        assert_eq!(bar_width_percent(10, 0), None);
        assert_eq!(bar_width_percent(0, 0), None);
        assert_eq!(bar_width_percent(10, -1), None);
    }

    #[test]
    fn test_quality_color_ramp() {
        assert_eq!(quality_color(-1), "white");
        assert_eq!(quality_color(50), "hsla(0,65%,50%, 1)");
        assert_eq!(quality_color(88), "hsla(20,65%,50%, 1)");
        assert_eq!(quality_color(95), "hsla(60,65%,50%, 1)");
        assert_eq!(quality_color(99), "hsla(120,65%,50%, 1)");
        assert_eq!(quality_color(100), "hsla(190,65%,50%, 1)");
    }
}
