//! Input options for range compression and table rendering.
//!
//! This module contains the configuration types that control how the
//! library formats its output. Every type has a `Default` carrying the
//! documented defaults and chained builders for overriding them.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Formatting options for [`range_string`](crate::range_string).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeOptions {
    /// Placed between runs and singletons
    pub separator: String,
    /// Placed between the start and end of a multi-element run
    pub range_symbol: String,
    /// Display the end of a run as one past its last value
    pub exclusive_end: bool,
    /// Drop negative values before grouping
    pub non_negative_only: bool,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            separator: " ".to_string(),
            range_symbol: " to ".to_string(),
            exclusive_end: false,
            non_negative_only: true,
        }
    }
}

impl RangeOptions {
    /// Create options with the defaults (`"1 to 4 10"` style).
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for a given style preset.
    pub fn from_style(style: RangeStyle) -> Self {
        match style {
            RangeStyle::Words => Self::default(),
            RangeStyle::Dash => Self::new().separator(",").range_symbol("-"),
            RangeStyle::Slice => Self::new()
                .separator(",")
                .range_symbol(":")
                .exclusive_end(true),
        }
    }

    /// Builder: set the run separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Builder: set the range symbol
    pub fn range_symbol(mut self, range_symbol: impl Into<String>) -> Self {
        self.range_symbol = range_symbol.into();
        self
    }

    /// Builder: set half-open display of run ends
    pub fn exclusive_end(mut self, exclusive: bool) -> Self {
        self.exclusive_end = exclusive;
        self
    }

    /// Builder: set whether negative values are dropped
    pub fn non_negative_only(mut self, non_negative: bool) -> Self {
        self.non_negative_only = non_negative;
        self
    }
}

/// Named presets for range notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RangeStyle {
    /// `1 to 4 10 15 to 17`
    #[default]
    Words,
    /// `1-4,10,15-17`
    Dash,
    /// `1:5,10,15:18` (half-open ends)
    Slice,
}

impl FromStr for RangeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" | "default" => Ok(RangeStyle::Words),
            "dash" | "dashes" => Ok(RangeStyle::Dash),
            "slice" | "python" => Ok(RangeStyle::Slice),
            _ => Err(format!("Unknown range style: {}", s)),
        }
    }
}

/// Layout options for [`tabulate`](crate::tabulate).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    /// Target total character width of the table
    pub width: usize,
    /// Number of spaces between columns
    pub space: usize,
    /// Render the first row as a header followed by a border
    pub header: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            width: 79,
            space: 2,
            header: true,
        }
    }
}

impl TableOptions {
    /// Create options with the defaults (79 wide, 2 spaces, header row).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: set total width
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Builder: set inter-column spacing
    pub fn space(mut self, space: usize) -> Self {
        self.space = space;
        self
    }

    /// Builder: set header row
    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}
