//! Core types: intervals, time zones, availability message formatting

pub mod format;
pub mod interval;
pub mod tracing;
pub mod zone;

pub use format::{
    DateOrder, DisplayStyle, FormatOptions, MessageFormatter, ParseStyleError, TimeFormat,
};
pub use interval::{Interval, sort_by_start};
pub use tracing::{TracingConfig, TracingError, TracingOutputFormat, init_tracing};
pub use zone::{
    US_ZONES, WORLDWIDE_ZONES, ZoneCatalog, ZoneError, ZoneResult, abbreviation, parse_zone,
};
