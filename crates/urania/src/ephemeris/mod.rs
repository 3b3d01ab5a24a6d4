pub mod provider;
pub mod time;
pub mod types;

pub use provider::{compute_chart, ChartRequest, Ephemeris, EphemerisError};
pub use time::{local_to_utc, parse_datetime, StaticTimeZoneDb, TimeError, TimeZoneDb};
pub use types::{BodyId, BodyPosition, ChartSnapshot, GeoLocation, HouseCusps, HouseSystem};
