use serde::Serialize;
use std::f64::consts::PI;

// Pulls the swing towards vertical; at 1.0 recoil could swing a full 90 degrees.
const VERTICAL_SCALE: f64 = 0.8;
// Widest possible wedge, reached at zero recoil stat.
const MAX_SPREAD_DEGREES: f64 = 180.0;

/// Direction the weapon kicks, in degrees off vertical. Positive is to the right.
///
/// Values ending in 5 kick straight up; values near 100 barely move at all.
pub fn recoil_direction(value: f64) -> f64 {
    ((value + 5.0) * (2.0 * PI / 20.0)).sin() * (100.0 - value)
}

/// A pie-wedge showing where a weapon's recoil may push the sight.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecoilGeometry {
    pub direction_degrees: f64,
    pub spread_degrees: f64,
    /// SVG path in a `0 0 2 1` view box, pivoting on the bottom centre.
    pub path: String,
}

impl RecoilGeometry {
    pub fn from_stat_value(value: i32) -> Self {
        let value = f64::from(value.clamp(0, 100));
        let direction_degrees = recoil_direction(value) * VERTICAL_SCALE;
        let spread_degrees = ((100.0 - value) / 100.0) * (MAX_SPREAD_DEGREES / 2.0);

        let direction = direction_degrees.to_radians();
        let spread = spread_degrees.to_radians();
        let (x_left, y_left) = ((direction - spread).sin(), (direction - spread).cos());
        let (x_right, y_right) = ((direction + spread).sin(), (direction + spread).cos());

        let path = format!(
            "M1,1 L{:.4},{:.4} A1,1 0 0,1 {:.4},{:.4} Z",
            1.0 + x_left,
            1.0 - y_left,
            1.0 + x_right,
            1.0 - y_right
        );

        Self {
            direction_degrees,
            spread_degrees,
            path,
        }
    }

    pub fn to_svg(&self) -> String {
        format!(
            "<svg height=\"12\" viewBox=\"0 0 2 1\"><circle r=\"1\" cx=\"1\" cy=\"1\" fill=\"#333\"/><path d=\"{}\" fill=\"#FFF\"/></svg>",
            self.path
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_ending_in_five_kick_straight_up() {
        for value in [5, 25, 45, 65, 85] {
            let geometry = RecoilGeometry::from_stat_value(value);
            assert!(geometry.direction_degrees.abs() < 1e-9, "value {}", value);
        }
    }

    #[test]
    fn test_perfect_recoil_has_no_spread() {
        let geometry = RecoilGeometry::from_stat_value(100);
        assert_eq!(geometry.spread_degrees, 0.0);
        assert!(geometry.direction_degrees.abs() < 1e-9);
        assert_eq!(geometry.path, "M1,1 L1.0000,0.0000 A1,1 0 0,1 1.0000,0.0000 Z");
    }

    #[test]
    fn test_low_recoil_swings_sideways() {
        let geometry = RecoilGeometry::from_stat_value(10);
        assert!((geometry.direction_degrees + 72.0).abs() < 1e-9);
        assert!((geometry.spread_degrees - 81.0).abs() < 1e-9);
    }

    #[test]
    fn test_out_of_range_values_are_clamped() {
        assert_eq!(
            RecoilGeometry::from_stat_value(140),
            RecoilGeometry::from_stat_value(100)
        );
        assert_eq!(
            RecoilGeometry::from_stat_value(-3),
            RecoilGeometry::from_stat_value(0)
        );
    }
}
