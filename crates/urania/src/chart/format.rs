use crate::angles::{normalize_degrees, ZodiacSign};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// How the degree mark is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DegreeStyle {
    /// `10° 30'`
    #[default]
    Symbol,
    /// `10 deg 30'`, for fonts without the degree sign
    Ascii,
}

/// Degrees, minutes and seconds of an angle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dms {
    pub degrees: u32,
    pub minutes: u32,
    pub seconds: f64,
}

/// Split a non-negative angle into whole degrees, whole minutes and seconds.
pub fn to_dms(angle: f64) -> Dms {
    let angle = angle.abs();
    let degrees = angle.floor();
    let minutes_full = (angle - degrees) * 60.0;
    let minutes = minutes_full.floor();
    Dms {
        degrees: degrees as u32,
        minutes: minutes as u32,
        seconds: (minutes_full - minutes) * 60.0,
    }
}

/// `"Sign D° MM' SS.SS\""`, seconds rounded to hundredths.
pub fn format_longitude(longitude: f64, style: DegreeStyle) -> String {
    let lon = normalize_degrees(longitude);
    // Round in hundredths of an arc-second so 29°59'59.999" carries into the next sign
    let total = (lon * 360_000.0).round() as u64 % (360 * 360_000);
    let lon = total as f64 / 360_000.0;
    let sign = ZodiacSign::from_longitude(lon);

    let within = total % (30 * 360_000);
    let degrees = within / 360_000;
    let minutes = (within % 360_000) / 6_000;
    let centiseconds = within % 6_000;

    let mark = match style {
        DegreeStyle::Symbol => "° ",
        DegreeStyle::Ascii => " deg ",
    };

    let mut out = String::with_capacity(32);
    let _ = write!(
        out,
        "{} {}{}{:02}' {:02}.{:02}\"",
        sign.name(),
        degrees,
        mark,
        minutes,
        centiseconds / 100,
        centiseconds % 100
    );
    out
}
