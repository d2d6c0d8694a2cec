//! Integer range compression.
//!
//! Turns an unordered collection of integers into a compact notation that
//! groups consecutive values into runs:
//!
//! ```rust
//! use misctoolslib::{range_string, RangeOptions};
//!
//! let ints = [1, 2, 3, 4, 10, 15, 16, 17];
//! assert_eq!(range_string(ints, &RangeOptions::new()).unwrap(), "1 to 4 10 15 to 17");
//!
//! let dashed = RangeOptions::new().separator(",").range_symbol("-");
//! assert_eq!(range_string(ints, &dashed).unwrap(), "1-4,10,15-17");
//! ```
//!
//! [`parse_range_string`] is the inverse: it expands a rendered string back
//! into the sorted list of integers it describes.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::MisctoolsError;
use crate::options::RangeOptions;
use crate::Result;

/// A maximal run of consecutive integers, inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    /// First value in the run
    pub start: i64,
    /// Last value in the run (inclusive)
    pub end: i64,
}

impl Run {
    /// A run holding a single value.
    pub fn single(value: i64) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    /// Number of integers in the run.
    pub fn count(&self) -> u64 {
        self.end.abs_diff(self.start) + 1
    }

    /// Whether the run holds exactly one value.
    pub fn is_single(&self) -> bool {
        self.start == self.end
    }

    /// The integers covered by the run.
    pub fn values(&self) -> RangeInclusive<i64> {
        self.start..=self.end
    }

    /// Render the run with the given options.
    ///
    /// Singletons print as the bare integer; longer runs print as
    /// `start{range_symbol}end`, with `end` one past the last value when
    /// `exclusive_end` is set.
    pub fn render(&self, options: &RangeOptions) -> String {
        if self.is_single() {
            return self.start.to_string();
        }
        // i128 so that a half-open end past i64::MAX still prints
        let end = i128::from(self.end) + i128::from(options.exclusive_end);
        format!("{}{}{}", self.start, options.range_symbol, end)
    }
}

/// Group integers into maximal runs of consecutive values.
///
/// Values are deduplicated and sorted first; with `non_negative_only`,
/// values below zero are dropped. Fails with [`MisctoolsError::EmptyInput`]
/// when nothing is left to group.
pub fn compress_runs<I>(values: I, non_negative_only: bool) -> Result<Vec<Run>>
where
    I: IntoIterator<Item = i64>,
{
    let sorted: BTreeSet<i64> = values
        .into_iter()
        .filter(|&value| !non_negative_only || value >= 0)
        .collect();

    let mut runs: Vec<Run> = Vec::new();
    for value in sorted {
        match runs.last_mut() {
            Some(run) if run.end.checked_add(1) == Some(value) => run.end = value,
            _ => runs.push(Run::single(value)),
        }
    }

    if runs.is_empty() {
        return Err(MisctoolsError::EmptyInput);
    }

    trace!(runs = runs.len(), "grouped integers into runs");
    Ok(runs)
}

/// Return a structured string for a collection of integers.
///
/// ```rust
/// use misctoolslib::{range_string, RangeOptions};
///
/// let ints = [1, 2, 3, 4, 10, 15, 16, 17];
/// let slice = RangeOptions::new()
///     .separator(",")
///     .range_symbol(":")
///     .exclusive_end(true);
/// assert_eq!(range_string(ints, &slice).unwrap(), "1:5,10,15:18");
/// ```
pub fn range_string<I>(values: I, options: &RangeOptions) -> Result<String>
where
    I: IntoIterator<Item = i64>,
{
    let runs = compress_runs(values, options.non_negative_only)?;
    let rendered: Vec<String> = runs.iter().map(|run| run.render(options)).collect();
    Ok(rendered.join(options.separator.as_str()))
}

/// Expand a range string back into the sorted, deduplicated integers it
/// describes.
///
/// Parsing is greedy: an integer, then optionally the range symbol and an
/// end integer, then either the separator or the end of the text.
pub fn parse_range_string(text: &str, options: &RangeOptions) -> Result<Vec<i64>> {
    if text.is_empty() {
        return Err(MisctoolsError::InvalidArgument(
            "range string is empty".to_string(),
        ));
    }

    let mut values = Vec::new();
    let mut rest = text;
    loop {
        let (start, tail) = take_integer(rest)?;
        let start = narrow(start)?;
        rest = tail;

        let ranged = match rest.strip_prefix(options.range_symbol.as_str()) {
            Some(tail) if !options.range_symbol.is_empty() => Some(tail),
            _ => None,
        };
        if let Some(tail) = ranged {
            let (end, tail) = take_integer(tail)?;
            rest = tail;
            // A half-open end may sit one past i64::MAX
            let last = narrow(end.saturating_sub(i128::from(options.exclusive_end)))?;
            if last < start {
                return Err(MisctoolsError::InvalidArgument(format!(
                    "range {}{}{} runs backwards",
                    start, options.range_symbol, end
                )));
            }
            values.extend(start..=last);
        } else {
            values.push(start);
        }

        if rest.is_empty() {
            break;
        }
        rest = match rest.strip_prefix(options.separator.as_str()) {
            Some(tail) if !options.separator.is_empty() => tail,
            _ => {
                return Err(MisctoolsError::InvalidArgument(format!(
                    "unexpected text '{}' in range string",
                    rest
                )))
            }
        };
    }

    values.sort_unstable();
    values.dedup();
    Ok(values)
}

/// Split a leading (optionally negative) integer off `text`.
///
/// The value is read as `i128` so that rendered half-open ends past
/// `i64::MAX` still parse; callers narrow it with [`narrow`].
fn take_integer(text: &str) -> Result<(i128, &str)> {
    let sign = usize::from(text.starts_with('-'));
    let digits = text[sign..]
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len() - sign);
    if digits == 0 {
        return Err(MisctoolsError::InvalidArgument(format!(
            "expected an integer at '{}'",
            text
        )));
    }
    let (number, rest) = text.split_at(sign + digits);
    let value = number
        .parse::<i128>()
        .map_err(|e| MisctoolsError::InvalidArgument(format!("'{}': {}", number, e)))?;
    Ok((value, rest))
}

fn narrow(value: i128) -> Result<i64> {
    i64::try_from(value).map_err(|_| {
        MisctoolsError::InvalidArgument(format!("{} does not fit in a 64-bit integer", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::RangeStyle;

    const SAMPLE: [i64; 8] = [1, 2, 3, 4, 10, 15, 16, 17];

    #[test]
    fn test_range_string_defaults() {
        let result = range_string(SAMPLE, &RangeOptions::new()).unwrap();
        assert_eq!(result, "1 to 4 10 15 to 17");
    }

    #[test]
    fn test_range_string_custom_symbols() {
        let opts = RangeOptions::new().separator(",").range_symbol("-");
        assert_eq!(range_string(SAMPLE, &opts).unwrap(), "1-4,10,15-17");
    }

    #[test]
    fn test_range_string_exclusive_end() {
        let opts = RangeOptions::new()
            .separator(",")
            .range_symbol(":")
            .exclusive_end(true);
        assert_eq!(range_string(SAMPLE, &opts).unwrap(), "1:5,10,15:18");
    }

    #[test]
    fn test_range_string_drops_negatives() {
        let result = range_string([-3, -1, 0, 1, 2], &RangeOptions::new()).unwrap();
        assert_eq!(result, "0 to 2");
    }

    #[test]
    fn test_range_string_keeps_negatives_when_allowed() {
        let opts = RangeOptions::new().non_negative_only(false);
        let result = range_string([-3, -1, 0, 1, 2], &opts).unwrap();
        assert_eq!(result, "-3 -1 to 2");
    }

    #[test]
    fn test_range_string_unsorted_with_duplicates() {
        let result = range_string([5, 3, 4, 4, 3, 9], &RangeOptions::new()).unwrap();
        assert_eq!(result, "3 to 5 9");
    }

    #[test]
    fn test_range_string_single_value() {
        assert_eq!(range_string([7], &RangeOptions::new()).unwrap(), "7");
    }

    #[test]
    fn test_range_string_empty_input() {
        let empty: Vec<i64> = vec![];
        assert_eq!(
            range_string(empty, &RangeOptions::new()),
            Err(MisctoolsError::EmptyInput)
        );
    }

    #[test]
    fn test_range_string_empty_after_filtering() {
        assert_eq!(
            range_string([-5, -2], &RangeOptions::new()),
            Err(MisctoolsError::EmptyInput)
        );
    }

    #[test]
    fn test_exclusive_end_at_i64_max() {
        let opts = RangeOptions::new().exclusive_end(true);
        let result = range_string([i64::MAX - 1, i64::MAX], &opts).unwrap();
        assert_eq!(result, format!("{} to {}", i64::MAX - 1, i128::from(i64::MAX) + 1));
    }

    #[test]
    fn test_parse_range_string_exclusive_end_at_i64_max() {
        let opts = RangeOptions::new().exclusive_end(true);
        let values = [i64::MAX - 1, i64::MAX];
        let rendered = range_string(values, &opts).unwrap();
        assert_eq!(parse_range_string(&rendered, &opts).unwrap(), values.to_vec());

        let slice = RangeOptions::from_style(RangeStyle::Slice).non_negative_only(false);
        let values = [i64::MIN, i64::MIN + 1, 0, i64::MAX - 2, i64::MAX - 1, i64::MAX];
        let rendered = range_string(values, &slice).unwrap();
        assert_eq!(parse_range_string(&rendered, &slice).unwrap(), values.to_vec());
    }

    #[test]
    fn test_parse_range_string_rejects_out_of_range_values() {
        let opts = RangeOptions::new();
        assert!(parse_range_string("9223372036854775808", &opts).is_err());
        assert!(parse_range_string("1 to 9223372036854775808", &opts).is_err());
        let exclusive = RangeOptions::new().exclusive_end(true);
        assert!(parse_range_string("1 to 9223372036854775809", &exclusive).is_err());
    }

    #[test]
    fn test_compress_runs() {
        let runs = compress_runs(SAMPLE, true).unwrap();
        assert_eq!(
            runs,
            vec![
                Run { start: 1, end: 4 },
                Run::single(10),
                Run { start: 15, end: 17 },
            ]
        );
        assert_eq!(runs[0].count(), 4);
        assert!(runs[1].is_single());
        assert_eq!(runs[2].values().collect::<Vec<_>>(), vec![15, 16, 17]);
    }

    #[test]
    fn test_parse_range_string_defaults() {
        let values = parse_range_string("1 to 4 10 15 to 17", &RangeOptions::new()).unwrap();
        assert_eq!(values, SAMPLE.to_vec());
    }

    #[test]
    fn test_parse_range_string_exclusive() {
        let opts = RangeOptions::new()
            .separator(",")
            .range_symbol(":")
            .exclusive_end(true);
        let values = parse_range_string("1:5,10,15:18", &opts).unwrap();
        assert_eq!(values, SAMPLE.to_vec());
    }

    #[test]
    fn test_parse_range_string_negative_dash() {
        let opts = RangeOptions::new().separator(",").range_symbol("-");
        let values = parse_range_string("-5--3,-1-1", &opts).unwrap();
        assert_eq!(values, vec![-5, -4, -3, -1, 0, 1]);
    }

    #[test]
    fn test_parse_range_string_rejects_garbage() {
        let opts = RangeOptions::new();
        assert!(parse_range_string("", &opts).is_err());
        assert!(parse_range_string("1 to", &opts).is_err());
        assert!(parse_range_string("a", &opts).is_err());
        assert!(parse_range_string("1,2", &opts).is_err());
        assert!(parse_range_string("5 to 2", &opts).is_err());
    }
}
