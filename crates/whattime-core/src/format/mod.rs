//! Availability message formatting.
//!
//! This module turns a set of availability intervals into the shareable
//! text shown to the other side of a scheduling conversation:
//! - **Message styles**: a header in the chosen tone followed by one line
//!   per interval, rendered across every selected time zone
//! - **Table style**: a fixed-width table with one column per zone
//!
//! # Example
//!
//! ```rust
//! use whattime_core::format::{DisplayStyle, MessageFormatter};
//! use whattime_core::interval::Interval;
//! use chrono::{TimeZone, Utc};
//!
//! let formatter = MessageFormatter::with_defaults();
//! let intervals = vec![Interval::new(
//!     Utc.with_ymd_and_hms(2024, 1, 1, 15, 0, 0).unwrap(),
//!     Utc.with_ymd_and_hms(2024, 1, 1, 16, 0, 0).unwrap(),
//! )];
//! let zones = vec![chrono_tz::Etc::GMT];
//!
//! let lines = formatter.format(&intervals, &zones, DisplayStyle::Normal);
//! assert_eq!(lines[1], "Monday (1/1) 3pm-4pm GMT");
//! ```

use std::str::FromStr;

use chrono::{DateTime, Datelike, Timelike};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interval::{self, Interval};
use crate::zone;

mod table;

const HEADER_NORMAL: &str = "I'm available these times:";
const HEADER_CUTE: &str = "Can we please do one of these times 🥺👉👈?";
const HEADER_AGGRESSIVE: &str = "This is the last time I'm sending you my availability 😡";
const HEADER_INVERSE: &str = "I cannot do these times:";
const ELON_LINE: &str = "I don't have time.";
const NO_ZONES_LINE: &str = "Copy not working!! Notify me in the feedback form please!";
const NO_SELECTION_LINE: &str =
    "Nothing selected. Click and drag on the calendar to select availability.";

/// The tone/format template applied to the rendered message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayStyle {
    /// Plain "I'm available these times:" header.
    #[default]
    Normal,
    /// Playful header.
    Cute,
    /// Terse, annoyed header.
    Aggressive,
    /// A single fixed line; the intervals are discarded.
    Elon,
    /// Interval lines only, no header.
    Raw,
    /// "I cannot do these times:" header.
    ///
    /// Label change only: the intervals themselves are not complemented.
    Inverse,
    /// Fixed-width table with one column per zone.
    Table,
}

impl DisplayStyle {
    /// Returns the pick-list label for this style.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Normal => "Boring",
            Self::Cute => "Cute",
            Self::Aggressive => "Aggressive",
            Self::Elon => "Elon",
            Self::Raw => "Raw",
            Self::Inverse => "Inverse",
            Self::Table => "Table",
        }
    }
}

/// Error returned when parsing an unknown display style name.
#[derive(Debug, Error)]
#[error("unknown display style: {0}")]
pub struct ParseStyleError(String);

impl FromStr for DisplayStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "normal" | "boring" => Ok(Self::Normal),
            "cute" => Ok(Self::Cute),
            "aggressive" => Ok(Self::Aggressive),
            "elon" => Ok(Self::Elon),
            "raw" => Ok(Self::Raw),
            "inverse" => Ok(Self::Inverse),
            "table" => Ok(Self::Table),
            _ => Err(ParseStyleError(s.to_string())),
        }
    }
}

/// Time format preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeFormat {
    /// 12-hour format with am/pm (e.g. "3pm", "3:30pm").
    #[default]
    H12,
    /// 24-hour format (e.g. "15", "15:30").
    H24,
}

/// Month/day order in the day label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOrder {
    /// "Monday (1/15)"
    #[default]
    MonthDay,
    /// "Monday (15/1)"
    DayMonth,
}

/// Configuration options for message formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatOptions {
    /// Clock rendering preference.
    pub time_format: TimeFormat,
    /// Month/day order in day labels.
    pub date_order: DateOrder,
}

/// Formatter for availability messages.
///
/// A pure function of its inputs: identical intervals, zones, and style
/// always produce identical output (modulo tz database version). The input
/// interval slice is never mutated; sorting happens on a copy.
#[derive(Debug, Clone)]
pub struct MessageFormatter {
    options: FormatOptions,
}

impl MessageFormatter {
    /// Creates a new MessageFormatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }

    /// Creates a new MessageFormatter with default options.
    pub fn with_defaults() -> Self {
        Self::new(FormatOptions::default())
    }

    /// Renders the availability message, one output line per element.
    ///
    /// Two abnormal input states degrade to a single diagnostic line instead
    /// of an error: an empty zone list and an empty interval list. Both are
    /// checked before style dispatch, so they win over every style.
    pub fn format(&self, intervals: &[Interval], zones: &[Tz], style: DisplayStyle) -> Vec<String> {
        if zones.is_empty() {
            return vec![NO_ZONES_LINE.to_string()];
        }
        if intervals.is_empty() {
            return vec![NO_SELECTION_LINE.to_string()];
        }

        let sorted = interval::sort_by_start(intervals);

        match style {
            DisplayStyle::Normal => with_header(HEADER_NORMAL, self.interval_lines(&sorted, zones)),
            DisplayStyle::Cute => with_header(HEADER_CUTE, self.interval_lines(&sorted, zones)),
            DisplayStyle::Aggressive => {
                with_header(HEADER_AGGRESSIVE, self.interval_lines(&sorted, zones))
            }
            DisplayStyle::Elon => vec![ELON_LINE.to_string()],
            DisplayStyle::Raw => self.interval_lines(&sorted, zones),
            DisplayStyle::Inverse => {
                with_header(HEADER_INVERSE, self.interval_lines(&sorted, zones))
            }
            DisplayStyle::Table => {
                let mut lines = vec![HEADER_NORMAL.to_string(), String::new()];
                lines.extend(table::render(self, &sorted, zones));
                lines
            }
        }
    }

    /// Renders the message as one flat string, lines joined with `"\n"`.
    ///
    /// This is the export/clipboard form of [`format`](Self::format).
    pub fn clipboard_text(
        &self,
        intervals: &[Interval],
        zones: &[Tz],
        style: DisplayStyle,
    ) -> String {
        self.format(intervals, zones, style).join("\n")
    }

    fn interval_lines(&self, sorted: &[Interval], zones: &[Tz]) -> Vec<String> {
        sorted
            .iter()
            .map(|iv| self.interval_line(iv, zones))
            .collect()
    }

    fn interval_line(&self, iv: &Interval, zones: &[Tz]) -> String {
        let times: Vec<String> = zones
            .iter()
            .map(|tz| {
                format!(
                    "{} {}",
                    self.time_range(iv, *tz),
                    zone::abbreviation(*tz, iv.start)
                )
            })
            .collect();

        format!("{} {}", self.day_label(iv, zones[0]), times.join(" / "))
    }

    /// Renders `"start-end"` for an interval in one zone.
    pub(crate) fn time_range(&self, iv: &Interval, tz: Tz) -> String {
        format!(
            "{}-{}",
            self.clock(iv.start.with_timezone(&tz)),
            self.clock(iv.end.with_timezone(&tz))
        )
    }

    /// Renders the day label from the interval's start in the first zone.
    ///
    /// The label is derived from one reference zone only; near midnight it
    /// can disagree with the calendar date implied by another zone's times.
    pub(crate) fn day_label(&self, iv: &Interval, first_zone: Tz) -> String {
        let local = iv.start.with_timezone(&first_zone);
        let weekday = local.format("%A");
        match self.options.date_order {
            DateOrder::MonthDay => format!("{} ({}/{})", weekday, local.month(), local.day()),
            DateOrder::DayMonth => format!("{} ({}/{})", weekday, local.day(), local.month()),
        }
    }

    /// Renders a wall-clock time.
    ///
    /// 12-hour: hour in `[1,12]` without leading zero, minutes omitted when
    /// zero ("3pm", "3:05pm"). 24-hour: bare hour when minutes are zero,
    /// otherwise "H:MM".
    fn clock(&self, local: DateTime<Tz>) -> String {
        let hour = local.hour();
        let minute = local.minute();

        match self.options.time_format {
            TimeFormat::H12 => {
                let meridiem = if hour >= 12 { "pm" } else { "am" };
                let display = match hour % 12 {
                    0 => 12,
                    h => h,
                };
                if minute == 0 {
                    format!("{display}{meridiem}")
                } else {
                    format!("{display}:{minute:02}{meridiem}")
                }
            }
            TimeFormat::H24 => {
                if minute == 0 {
                    hour.to_string()
                } else {
                    format!("{hour}:{minute:02}")
                }
            }
        }
    }
}

fn with_header(header: &str, mut lines: Vec<String>) -> Vec<String> {
    lines.insert(0, header.to_string());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
    }

    fn hour_block(start: DateTime<Utc>) -> Interval {
        Interval::new(start, start + chrono::Duration::hours(1))
    }

    mod display_style {
        use super::*;

        #[test]
        fn default_is_normal() {
            assert_eq!(DisplayStyle::default(), DisplayStyle::Normal);
        }

        #[test]
        fn display_names() {
            assert_eq!(DisplayStyle::Normal.display_name(), "Boring");
            assert_eq!(DisplayStyle::Elon.display_name(), "Elon");
            assert_eq!(DisplayStyle::Table.display_name(), "Table");
        }

        #[test]
        fn from_str() {
            assert_eq!("cute".parse::<DisplayStyle>().unwrap(), DisplayStyle::Cute);
            assert_eq!(
                "TABLE".parse::<DisplayStyle>().unwrap(),
                DisplayStyle::Table
            );
            // The UI label for Normal is accepted too.
            assert_eq!(
                "boring".parse::<DisplayStyle>().unwrap(),
                DisplayStyle::Normal
            );
            assert!("shakespearean".parse::<DisplayStyle>().is_err());
        }

        #[test]
        fn serde_roundtrip() {
            let style = DisplayStyle::Aggressive;
            let json = serde_json::to_string(&style).unwrap();
            assert_eq!(json, "\"aggressive\"");
            let parsed: DisplayStyle = serde_json::from_str(&json).unwrap();
            assert_eq!(style, parsed);
        }
    }

    mod options {
        use super::*;

        #[test]
        fn default_values() {
            let opts = FormatOptions::default();
            assert_eq!(opts.time_format, TimeFormat::H12);
            assert_eq!(opts.date_order, DateOrder::MonthDay);
        }

        #[test]
        fn toml_style_names() {
            let json = serde_json::to_string(&TimeFormat::H24).unwrap();
            assert_eq!(json, "\"h24\"");
            let json = serde_json::to_string(&DateOrder::DayMonth).unwrap();
            assert_eq!(json, "\"day_month\"");
        }
    }

    mod diagnostics {
        use super::*;

        #[test]
        fn empty_zones_yields_broken_copy_line() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![hour_block(utc(2024, 1, 1, 15, 0, 0))];

            let lines = formatter.format(&intervals, &[], DisplayStyle::Normal);
            assert_eq!(
                lines,
                vec!["Copy not working!! Notify me in the feedback form please!"]
            );
        }

        #[test]
        fn empty_intervals_yields_selection_hint() {
            let formatter = MessageFormatter::with_defaults();
            let zones = vec![chrono_tz::Etc::GMT];

            for style in [
                DisplayStyle::Normal,
                DisplayStyle::Elon,
                DisplayStyle::Raw,
                DisplayStyle::Table,
            ] {
                let lines = formatter.format(&[], &zones, style);
                assert_eq!(
                    lines,
                    vec!["Nothing selected. Click and drag on the calendar to select availability."]
                );
            }
        }

        #[test]
        fn empty_zones_wins_over_empty_intervals() {
            let formatter = MessageFormatter::with_defaults();
            let lines = formatter.format(&[], &[], DisplayStyle::Normal);
            assert_eq!(
                lines,
                vec!["Copy not working!! Notify me in the feedback form please!"]
            );
        }
    }

    mod clock_rendering {
        use super::*;

        fn render(opts: FormatOptions, h: u32, m: u32) -> String {
            let formatter = MessageFormatter::new(opts);
            let iv = Interval::new(utc(2024, 1, 1, h, m, 0), utc(2024, 1, 1, 23, 59, 0));
            let range = formatter.time_range(&iv, chrono_tz::Etc::GMT);
            range.split('-').next().unwrap().to_string()
        }

        #[test]
        fn twelve_hour_omits_zero_minutes() {
            let opts = FormatOptions::default();
            assert_eq!(render(opts, 15, 0), "3pm");
            assert_eq!(render(opts, 15, 30), "3:30pm");
            assert_eq!(render(opts, 9, 5), "9:05am");
        }

        #[test]
        fn twelve_hour_midnight_and_noon() {
            let opts = FormatOptions::default();
            assert_eq!(render(opts, 0, 0), "12am");
            assert_eq!(render(opts, 0, 30), "12:30am");
            assert_eq!(render(opts, 12, 0), "12pm");
        }

        #[test]
        fn twenty_four_hour() {
            let opts = FormatOptions {
                time_format: TimeFormat::H24,
                ..Default::default()
            };
            assert_eq!(render(opts, 15, 0), "15");
            assert_eq!(render(opts, 15, 30), "15:30");
            assert_eq!(render(opts, 9, 5), "9:05");
            assert_eq!(render(opts, 0, 0), "0");
        }
    }

    mod message_styles {
        use super::*;

        #[test]
        fn normal_single_zone() {
            // The reference scenario: one Monday-afternoon hour, GMT, defaults.
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![hour_block(utc(2024, 1, 1, 15, 0, 0))];
            let zones = vec![chrono_tz::Etc::GMT];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Normal);
            assert_eq!(
                lines,
                vec!["I'm available these times:", "Monday (1/1) 3pm-4pm GMT"]
            );
        }

        #[test]
        fn raw_has_no_header() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![
                hour_block(utc(2024, 1, 1, 15, 0, 0)),
                hour_block(utc(2024, 1, 2, 9, 0, 0)),
            ];
            let zones = vec![chrono_tz::Etc::GMT];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Raw);
            assert_eq!(lines.len(), intervals.len());
            assert_eq!(lines[0], "Monday (1/1) 3pm-4pm GMT");
            assert_eq!(lines[1], "Tuesday (1/2) 9am-10am GMT");
        }

        #[test]
        fn elon_is_always_one_line() {
            let formatter = MessageFormatter::with_defaults();
            let intervals: Vec<Interval> = (0..5)
                .map(|d| hour_block(utc(2024, 1, 1 + d, 15, 0, 0)))
                .collect();
            let zones = vec![chrono_tz::Etc::GMT, chrono_tz::Asia::Tokyo];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Elon);
            assert_eq!(lines, vec!["I don't have time."]);
        }

        #[test]
        fn inverse_changes_label_only() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![hour_block(utc(2024, 1, 1, 15, 0, 0))];
            let zones = vec![chrono_tz::Etc::GMT];

            let inverse = formatter.format(&intervals, &zones, DisplayStyle::Inverse);
            let raw = formatter.format(&intervals, &zones, DisplayStyle::Raw);

            assert_eq!(inverse[0], "I cannot do these times:");
            // The interval lines are identical; nothing is complemented.
            assert_eq!(&inverse[1..], &raw[..]);
        }

        #[test]
        fn lines_sorted_by_start() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![
                hour_block(utc(2024, 1, 3, 9, 0, 0)),
                hour_block(utc(2024, 1, 1, 15, 0, 0)),
                hour_block(utc(2024, 1, 2, 9, 0, 0)),
            ];
            let zones = vec![chrono_tz::Etc::GMT];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Raw);
            assert_eq!(lines[0], "Monday (1/1) 3pm-4pm GMT");
            assert_eq!(lines[1], "Tuesday (1/2) 9am-10am GMT");
            assert_eq!(lines[2], "Wednesday (1/3) 9am-10am GMT");
        }

        #[test]
        fn input_order_is_preserved_in_caller_slice() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![
                hour_block(utc(2024, 1, 2, 9, 0, 0)),
                hour_block(utc(2024, 1, 1, 15, 0, 0)),
            ];
            let snapshot = intervals.clone();
            let zones = vec![chrono_tz::Etc::GMT];

            let _ = formatter.format(&intervals, &zones, DisplayStyle::Normal);
            assert_eq!(intervals, snapshot);
        }

        #[test]
        fn idempotent() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![
                hour_block(utc(2024, 1, 2, 9, 0, 0)),
                hour_block(utc(2024, 1, 1, 15, 0, 0)),
            ];
            let zones = vec![chrono_tz::America::New_York, chrono_tz::Etc::GMT];

            let first = formatter.format(&intervals, &zones, DisplayStyle::Cute);
            let second = formatter.format(&intervals, &zones, DisplayStyle::Cute);
            assert_eq!(first, second);
        }

        #[test]
        fn multiple_zones_joined_with_slash() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![hour_block(utc(2024, 1, 1, 15, 0, 0))];
            let zones = vec![chrono_tz::Etc::GMT, chrono_tz::Asia::Ho_Chi_Minh];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Raw);
            assert_eq!(lines, vec!["Monday (1/1) 3pm-4pm GMT / 10pm-11pm ICT"]);
        }

        #[test]
        fn day_label_follows_first_zone_only() {
            let formatter = MessageFormatter::with_defaults();
            // 03:00 UTC on Jan 2 is still Jan 1 evening in Los Angeles, but
            // the label comes from the first zone (Tokyo, already Jan 2).
            let intervals = vec![hour_block(utc(2024, 1, 2, 3, 0, 0))];
            let zones = vec![chrono_tz::Asia::Tokyo, chrono_tz::America::Los_Angeles];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Raw);
            assert_eq!(lines, vec!["Tuesday (1/2) 12pm-1pm JST / 7pm-8pm PST"]);
        }

        #[test]
        fn day_month_order() {
            let formatter = MessageFormatter::new(FormatOptions {
                date_order: DateOrder::DayMonth,
                ..Default::default()
            });
            let intervals = vec![hour_block(utc(2024, 1, 2, 9, 0, 0))];
            let zones = vec![chrono_tz::Etc::GMT];

            let lines = formatter.format(&intervals, &zones, DisplayStyle::Raw);
            assert_eq!(lines, vec!["Tuesday (2/1) 9am-10am GMT"]);
        }

        #[test]
        fn headers_by_style() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![hour_block(utc(2024, 1, 1, 15, 0, 0))];
            let zones = vec![chrono_tz::Etc::GMT];

            let cute = formatter.format(&intervals, &zones, DisplayStyle::Cute);
            assert_eq!(cute[0], "Can we please do one of these times 🥺👉👈?");

            let aggressive = formatter.format(&intervals, &zones, DisplayStyle::Aggressive);
            assert_eq!(
                aggressive[0],
                "This is the last time I'm sending you my availability 😡"
            );
        }

        #[test]
        fn clipboard_text_joins_with_newlines() {
            let formatter = MessageFormatter::with_defaults();
            let intervals = vec![hour_block(utc(2024, 1, 1, 15, 0, 0))];
            let zones = vec![chrono_tz::Etc::GMT];

            let text = formatter.clipboard_text(&intervals, &zones, DisplayStyle::Normal);
            assert_eq!(
                text,
                "I'm available these times:\nMonday (1/1) 3pm-4pm GMT"
            );
        }
    }
}
