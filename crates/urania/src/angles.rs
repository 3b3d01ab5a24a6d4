//! Angular helpers shared by the resolver and the wheel projector.
//!
//! All angles are degrees. Ecliptic longitudes live in `[0, 360)`; wheel
//! angles use screen convention (0° = 3 o'clock, growing clockwise on a
//! y-down canvas), so the Ascendant anchor at 180° sits at 9 o'clock.

use serde::{Deserialize, Serialize};

/// Wheel angle the Ascendant is pinned to (9 o'clock).
pub const WHEEL_ANCHOR_DEGREES: f64 = 180.0;

/// Reduce any angle into `[0, 360)`.
pub fn normalize_degrees(x: f64) -> f64 {
    let y = x % 360.0;
    let y = if y < 0.0 { y + 360.0 } else { y };
    // -1e-15 + 360.0 rounds to 360.0
    if y >= 360.0 {
        0.0
    } else {
        y
    }
}

/// Shortest arc between two longitudes, in `[0, 180]`.
pub fn shortest_separation(a: f64, b: f64) -> f64 {
    let d = normalize_degrees((a - b).abs());
    if d > 180.0 {
        360.0 - d
    } else {
        d
    }
}

/// Rotate an ecliptic longitude onto the wheel so the Ascendant lands on the
/// anchor. Longitude increasing eastward turns counter-clockwise on screen.
pub fn project_to_wheel_angle(longitude: f64, ascendant: f64) -> f64 {
    let relative = normalize_degrees(ascendant - longitude);
    normalize_degrees(relative + WHEEL_ANCHOR_DEGREES)
}

/// Screen-space coordinate on the wheel canvas.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WheelPoint {
    pub x: f32,
    pub y: f32,
}

impl WheelPoint {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: WheelPoint) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Place a wheel angle at `radius` around `center`.
pub fn polar_to_cartesian(center: WheelPoint, radius: f32, wheel_angle_deg: f64) -> WheelPoint {
    let rad = wheel_angle_deg.to_radians();
    WheelPoint {
        x: center.x + radius * rad.cos() as f32,
        y: center.y + radius * rad.sin() as f32,
    }
}

/// Zodiac sign index (0 = Aries .. 11 = Pisces) for a longitude.
pub fn sign_index(longitude: f64) -> u8 {
    ((normalize_degrees(longitude) / 30.0).floor() as u8).min(11)
}

/// Position within the sign, `[0, 30)`.
pub fn sign_degree(longitude: f64) -> f64 {
    normalize_degrees(longitude) % 30.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    pub fn from_longitude(longitude: f64) -> Self {
        Self::ALL[sign_index(longitude) as usize]
    }

    pub fn name(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "♈",
            ZodiacSign::Taurus => "♉",
            ZodiacSign::Gemini => "♊",
            ZodiacSign::Cancer => "♋",
            ZodiacSign::Leo => "♌",
            ZodiacSign::Virgo => "♍",
            ZodiacSign::Libra => "♎",
            ZodiacSign::Scorpio => "♏",
            ZodiacSign::Sagittarius => "♐",
            ZodiacSign::Capricorn => "♑",
            ZodiacSign::Aquarius => "♒",
            ZodiacSign::Pisces => "♓",
        }
    }

    /// Longitude where the sign begins.
    pub fn start_longitude(&self) -> f64 {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0) as f64 * 30.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_negative_and_large() {
        assert!((normalize_degrees(-30.0) - 330.0).abs() < 1e-12);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-12);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
    }

    #[test]
    fn test_normalize_idempotent_and_in_range() {
        let mut x = -2000.0;
        while x < 2000.0 {
            let n = normalize_degrees(x);
            assert!((0.0..360.0).contains(&n), "{x} -> {n}");
            assert_eq!(normalize_degrees(n), n);
            x += 7.3;
        }
        let tiny = normalize_degrees(-1e-15);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_separation_wraps_through_zero() {
        assert!((shortest_separation(350.0, 10.0) - 20.0).abs() < 1e-12);
        assert!((shortest_separation(10.0, 350.0) - 20.0).abs() < 1e-12);
        assert!((shortest_separation(10.0, 190.0) - 180.0).abs() < 1e-12);
        assert_eq!(shortest_separation(42.0, 42.0), 0.0);
    }

    #[test]
    fn test_separation_symmetric_and_bounded() {
        let samples = [-400.0, -90.0, 0.0, 0.4, 59.9, 179.99, 180.0, 270.0, 359.9, 721.0];
        for &a in &samples {
            for &b in &samples {
                let ab = shortest_separation(a, b);
                assert_eq!(ab, shortest_separation(b, a));
                assert!((0.0..=180.0).contains(&ab));
            }
        }
    }

    #[test]
    fn test_separation_nan_propagates() {
        assert!(shortest_separation(f64::NAN, 10.0).is_nan());
    }

    #[test]
    fn test_projection_anchor() {
        for asc in [0.0, 17.5, 123.4, 359.9] {
            assert_eq!(project_to_wheel_angle(asc, asc), WHEEL_ANCHOR_DEGREES);
        }
    }

    #[test]
    fn test_projection_direction() {
        // 90° east of the Ascendant is the IC side on a standard wheel: bottom of screen (y-down = 90°)
        assert!((project_to_wheel_angle(100.0, 10.0) - 90.0).abs() < 1e-9);
        // Descendant at 3 o'clock
        assert!(project_to_wheel_angle(190.0, 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_polar_to_cartesian_left() {
        let p = polar_to_cartesian(WheelPoint::new(100.0, 100.0), 50.0, 180.0);
        assert!((p.x - 50.0).abs() < 1e-4);
        assert!((p.y - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_sign_lookup() {
        assert_eq!(ZodiacSign::from_longitude(10.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(190.0), ZodiacSign::Libra);
        assert_eq!(ZodiacSign::from_longitude(-5.0), ZodiacSign::Pisces);
        assert!((sign_degree(45.5) - 15.5).abs() < 1e-12);
        assert_eq!(ZodiacSign::Leo.start_longitude(), 120.0);
    }
}
