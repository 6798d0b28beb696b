//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use whattime_core::{DateOrder, DisplayStyle, FormatOptions, TimeFormat};

/// whattime - Share your availability across time zones
#[derive(Debug, Parser)]
#[command(name = "whattime")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(long, short, env = "WHATTIME_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable debug output
    #[arg(long, short = 'v')]
    pub debug: bool,

    // --- Zone selection ---
    /// Time zone to render (IANA id, can be repeated; the first drives the day label)
    #[arg(long = "zone", short = 'z', action = clap::ArgAction::Append)]
    pub zones: Vec<String>,

    /// Print the zone pick-list and exit
    #[arg(long)]
    pub list_zones: bool,

    // --- Display options ---
    /// Message style
    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Use the 24-hour clock instead of am/pm
    #[arg(long)]
    pub h24: bool,

    /// Write day labels day-first (not everyone is from America)
    #[arg(long)]
    pub day_month: bool,

    /// Availability blocks as RFC 3339 START/END pairs; read from stdin when absent
    pub intervals: Vec<String>,
}

impl Cli {
    /// Returns the format options implied by CLI flags layered over defaults.
    ///
    /// The toggles only push away from the default direction, so an unset
    /// flag leaves the configured value alone.
    pub fn format_options(&self, defaults: FormatOptions) -> FormatOptions {
        FormatOptions {
            time_format: if self.h24 {
                TimeFormat::H24
            } else {
                defaults.time_format
            },
            date_order: if self.day_month {
                DateOrder::DayMonth
            } else {
                defaults.date_order
            },
        }
    }

    /// Returns the display style, falling back to the given default.
    pub fn display_style(&self, default: DisplayStyle) -> DisplayStyle {
        self.style.map(StyleArg::to_style).unwrap_or(default)
    }
}

/// Message style flag values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StyleArg {
    Normal,
    Cute,
    Aggressive,
    Elon,
    Raw,
    Inverse,
    Table,
}

impl StyleArg {
    /// Maps the flag value onto the core display style.
    pub fn to_style(self) -> DisplayStyle {
        match self {
            Self::Normal => DisplayStyle::Normal,
            Self::Cute => DisplayStyle::Cute,
            Self::Aggressive => DisplayStyle::Aggressive,
            Self::Elon => DisplayStyle::Elon,
            Self::Raw => DisplayStyle::Raw,
            Self::Inverse => DisplayStyle::Inverse,
            Self::Table => DisplayStyle::Table,
        }
    }
}
