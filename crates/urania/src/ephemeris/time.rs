//! Local civil time to UTC.

use chrono::{DateTime, FixedOffset, LocalResult, NaiveDateTime, TimeZone, Utc};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TimeError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),
    #[error("Local time {local} is ambiguous in {tzid}")]
    AmbiguousLocalTime { tzid: String, local: NaiveDateTime },
    #[error("Local time {local} does not exist in {tzid}")]
    NonexistentLocalTime { tzid: String, local: NaiveDateTime },
    #[error("Invalid date/time '{input}', expected YYYY-MM-DD HH:MM[:SS]")]
    InvalidDateTime { input: String },
}

/// Time-zone lookup. Returns `None` for an unknown zone id.
pub trait TimeZoneDb {
    fn offset_for(&self, tzid: &str, local: &NaiveDateTime) -> Option<LocalResult<FixedOffset>>;
}

/// Zone table of fixed offsets. "UTC" is always known.
#[derive(Debug, Clone, Default)]
pub struct StaticTimeZoneDb {
    zones: HashMap<String, FixedOffset>,
}

impl StaticTimeZoneDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a zone by its offset east of UTC, in seconds.
    pub fn with_zone(mut self, tzid: &str, east_seconds: i32) -> Option<Self> {
        let offset = FixedOffset::east_opt(east_seconds)?;
        self.zones.insert(tzid.to_string(), offset);
        Some(self)
    }

    pub fn insert(&mut self, tzid: &str, offset: FixedOffset) {
        self.zones.insert(tzid.to_string(), offset);
    }
}

impl TimeZoneDb for StaticTimeZoneDb {
    fn offset_for(&self, tzid: &str, local: &NaiveDateTime) -> Option<LocalResult<FixedOffset>> {
        let offset = match self.zones.get(tzid) {
            Some(offset) => *offset,
            None if tzid.eq_ignore_ascii_case("UTC") => FixedOffset::east_opt(0)?,
            None => return None,
        };
        Some(offset.offset_from_local_datetime(local))
    }
}

/// Convert a local date-time in the given zone to UTC.
///
/// Ambiguous and skipped local times are reported, never guessed.
pub fn local_to_utc(
    db: &dyn TimeZoneDb,
    tzid: &str,
    local: NaiveDateTime,
) -> Result<DateTime<Utc>, TimeError> {
    let resolved = db
        .offset_for(tzid, &local)
        .ok_or_else(|| TimeError::UnknownTimeZone(tzid.to_string()))?;

    let offset = match resolved {
        LocalResult::Single(offset) => offset,
        LocalResult::Ambiguous(_, _) => {
            return Err(TimeError::AmbiguousLocalTime {
                tzid: tzid.to_string(),
                local,
            })
        }
        LocalResult::None => {
            return Err(TimeError::NonexistentLocalTime {
                tzid: tzid.to_string(),
                local,
            })
        }
    };

    let utc = local - chrono::Duration::seconds(i64::from(offset.local_minus_utc()));
    Ok(Utc.from_utc_datetime(&utc))
}

/// Parse `YYYY-MM-DD HH:MM` or `YYYY-MM-DD HH:MM:SS`.
pub fn parse_datetime(input: &str) -> Result<NaiveDateTime, TimeError> {
    let trimmed = input.trim();
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M"))
        .map_err(|_| TimeError::InvalidDateTime {
            input: input.to_string(),
        })
}
