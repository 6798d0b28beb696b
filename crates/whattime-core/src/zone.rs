//! Time-zone resolution, abbreviations, and the zone pick-list.
//!
//! Zones enter the system as IANA identifier strings (e.g.
//! `"America/Los_Angeles"`) and are resolved to [`chrono_tz::Tz`] at the
//! edge. The formatter itself only ever sees resolved zones, so an unknown
//! identifier is always a caller error, never a formatting concern.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use thiserror::Error;

/// Result type for zone resolution.
pub type ZoneResult<T> = Result<T, ZoneError>;

/// Errors that can occur while resolving time zones.
#[derive(Debug, Error)]
pub enum ZoneError {
    /// The identifier is not in the IANA time-zone database.
    #[error("unknown time zone: {0}")]
    Unknown(String),
}

/// Abbreviation overrides for zones whose database abbreviation is
/// misleading or absent (the tz database renders Ho Chi Minh City as a bare
/// `+07` offset).
const ABBREVIATION_OVERRIDES: &[(&str, &str)] = &[("Asia/Ho_Chi_Minh", "ICT")];

/// US zones offered in the pick-list.
pub const US_ZONES: &[Tz] = &[
    chrono_tz::America::Los_Angeles,
    chrono_tz::America::Denver,
    chrono_tz::America::Chicago,
    chrono_tz::America::New_York,
];

/// Worldwide zones offered in the pick-list.
pub const WORLDWIDE_ZONES: &[Tz] = &[
    chrono_tz::Asia::Kolkata,
    chrono_tz::Asia::Shanghai,
    chrono_tz::Asia::Hong_Kong,
    chrono_tz::Asia::Tokyo,
    chrono_tz::Australia::Sydney,
    chrono_tz::Australia::Darwin,
    chrono_tz::Europe::Paris,
    chrono_tz::Europe::Berlin,
    chrono_tz::Etc::GMT,
];

/// Resolves an IANA identifier to a time zone.
pub fn parse_zone(id: &str) -> ZoneResult<Tz> {
    id.parse::<Tz>()
        .map_err(|_| ZoneError::Unknown(id.to_string()))
}

/// Returns the short display abbreviation for a zone at a given instant.
///
/// The override table is consulted before the database so that zones like
/// `Asia/Ho_Chi_Minh` show `ICT` instead of `+07`. Passing the instant in
/// (rather than asking the wall clock) keeps callers deterministic and picks
/// the DST-correct abbreviation for the time being rendered.
pub fn abbreviation(zone: Tz, at: DateTime<Utc>) -> String {
    for (id, abbr) in ABBREVIATION_OVERRIDES {
        if *id == zone.name() {
            return (*abbr).to_string();
        }
    }
    at.with_timezone(&zone).format("%Z").to_string()
}

/// The zone pick-list, built once at startup.
///
/// Holds the user's home zone plus the curated US and worldwide zones. The
/// home zone is listed first; the remaining choices are sorted by
/// identifier.
#[derive(Debug, Clone)]
pub struct ZoneCatalog {
    home: Tz,
    choices: Vec<Tz>,
}

impl ZoneCatalog {
    /// Builds the catalog around a home zone.
    pub fn new(home: Tz) -> Self {
        let mut choices: Vec<Tz> = US_ZONES
            .iter()
            .chain(WORLDWIDE_ZONES.iter())
            .copied()
            .filter(|tz| *tz != home)
            .collect();
        choices.sort_by_key(|tz| tz.name());
        Self { home, choices }
    }

    /// The home zone.
    pub fn home(&self) -> Tz {
        self.home
    }

    /// All zones in display order: home first, the rest sorted by id.
    pub fn zones(&self) -> Vec<Tz> {
        let mut all = Vec::with_capacity(self.choices.len() + 1);
        all.push(self.home);
        all.extend(self.choices.iter().copied());
        all
    }

    /// Whether the catalog offers the given zone.
    pub fn contains(&self, zone: Tz) -> bool {
        self.home == zone || self.choices.contains(&zone)
    }

    /// Pick-list entries as `"{abbr} - {id}"` lines, abbreviated at `at`.
    pub fn entries(&self, at: DateTime<Utc>) -> Vec<String> {
        self.zones()
            .into_iter()
            .map(|tz| format!("{} - {}", abbreviation(tz, at), tz.name()))
            .collect()
    }
}
