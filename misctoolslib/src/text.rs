//! Small string helpers: identifier sanitizing and word wrapping.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use textwrap::{WordSeparator, WrapAlgorithm};

use crate::error::MisctoolsError;
use crate::Result;

/// Default replacement used by [`alnum`] callers.
pub const DEFAULT_ALNUM_REPLACEMENT: &str = "_";

/// Default width used by [`wrap_and_join`] callers.
pub const DEFAULT_WRAP_WIDTH: usize = 70;

const TAB_SIZE: usize = 8;

/// Replace every non-alphanumeric character in `text` with `replacement`.
///
/// ```rust
/// use misctoolslib::alnum;
///
/// assert_eq!(alnum("1abc-A.pdb", "_"), "1abc_A_pdb");
/// ```
pub fn alnum(text: &str, replacement: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_alphanumeric() {
            result.push(c);
        } else {
            result.push_str(replacement);
        }
    }
    result
}

/// Word-wrap `text` to `width` columns.
///
/// Tabs are expanded to 8-column stops and every other whitespace
/// character, newlines included, becomes a plain space before wrapping.
/// Lines are filled greedily and break only at spaces and after hyphens;
/// words longer than `width` are split. Always returns at least one line;
/// wrapping empty text yields a single empty line.
pub fn wrap_lines(text: &str, width: usize) -> Result<Vec<Cow<'_, str>>> {
    if width == 0 {
        return Err(MisctoolsError::InvalidArgument(
            "wrap width must be at least 1".to_string(),
        ));
    }
    let options = textwrap::Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .word_separator(WordSeparator::AsciiSpace);
    let mut lines = match normalize_whitespace(text) {
        Cow::Borrowed(text) => textwrap::wrap(text, options),
        Cow::Owned(text) => textwrap::wrap(&text, options)
            .into_iter()
            .map(|line| Cow::Owned(line.into_owned()))
            .collect(),
    };
    if lines.is_empty() {
        lines.push(Cow::Borrowed(""));
    }
    Ok(lines)
}

/// Expand tabs and turn the remaining whitespace controls into spaces.
fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    if !text.contains(&['\t', '\n', '\r', '\x0b', '\x0c'][..]) {
        return Cow::Borrowed(text);
    }
    let mut result = String::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                result.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                result.push(' ');
                column = 0;
            }
            '\x0b' | '\x0c' => {
                result.push(' ');
                column += 1;
            }
            _ => {
                result.push(c);
                column += 1;
            }
        }
    }
    Cow::Owned(result)
}

/// Word-wrap `text` to `width` columns and join the lines with `joiner`.
///
/// ```rust
/// use misctoolslib::wrap_and_join;
///
/// let wrapped = wrap_and_join("the quick brown fox", 10, "\n").unwrap();
/// assert_eq!(wrapped, "the quick\nbrown fox");
/// ```
pub fn wrap_and_join(text: &str, width: usize, joiner: &str) -> Result<String> {
    Ok(wrap_lines(text, width)?.join(joiner))
}

/// A set that contains everything.
///
/// Useful as a stand-in wherever a membership filter is expected but no
/// filtering should happen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Everything;

impl Everything {
    /// Always true.
    pub fn contains<T: ?Sized>(&self, _item: &T) -> bool {
        true
    }
}
