//! Plain-text tables for columns of data.
//!
//! [`tabulate`] lays out parallel columns of strings as a bordered table:
//!
//! ```text
//! =====  =======================
//! Name   Description
//! =====  =======================
//! alpha  first letter
//! beta   second letter of the
//!        greek alphabet
//! =====  =======================
//! ```
//!
//! The first column is never wrapped: it is as wide as its longest cell.
//! The remaining width is shared by the other columns, whose cells are
//! word-wrapped to fit. With two columns the second one simply takes all of
//! the remaining width; with more, each wrapped column gets a share
//! proportional to its longest cell.

use tracing::{debug, trace};

use crate::error::MisctoolsError;
use crate::options::TableOptions;
use crate::text::wrap_lines;
use crate::Result;

/// Render columns of data as a text table.
///
/// Every column must hold the same number of cells. The output starts with
/// a border of `=` characters; with `options.header` a second border
/// follows the first row, and tables of three or more rows are closed with
/// a trailing border. A table with no rows is just the top border.
///
/// ```rust
/// use misctoolslib::{tabulate, TableOptions};
///
/// let table = tabulate(&[vec!["a"], vec!["b"]], &TableOptions::new().width(10).header(false)).unwrap();
/// assert_eq!(table, "=  =======\na  b");
/// ```
pub fn tabulate<C, S>(columns: &[C], options: &TableOptions) -> Result<String>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns: Vec<&[S]> = columns.iter().map(AsRef::as_ref).collect();
    let rows = row_count(&columns)?;
    let widths = compute_widths(&columns, options)?;
    debug!(columns = columns.len(), rows, ?widths, "laid out table");

    // A single column never joins cells, so the spacer stays empty
    let spacer = if widths.len() > 1 {
        " ".repeat(options.space)
    } else {
        String::new()
    };
    let border = widths
        .iter()
        .map(|&width| "=".repeat(width))
        .collect::<Vec<_>>()
        .join(spacer.as_str());

    let mut lines = vec![border.clone()];
    for irow in 0..rows {
        let cells = render_row(&columns, irow, &widths)?;
        let height = cells.first().map_or(0, Vec::len);
        trace!(row = irow, height, "rendered row");
        for iline in 0..height {
            let line: Vec<&str> = cells.iter().map(|cell| cell[iline].as_str()).collect();
            lines.push(line.join(spacer.as_str()));
        }
        if irow == 0 && options.header {
            lines.push(border.clone());
        }
    }
    if rows > 2 {
        lines.push(border);
    }

    Ok(lines.join("\n"))
}

/// Compute the character width of every column.
///
/// Fails with [`MisctoolsError::InvalidArgument`] when there are no
/// columns or when `options.width` leaves less than one character for a
/// wrapped column, and with [`MisctoolsError::ShapeMismatch`] when the
/// columns have different lengths.
pub fn column_widths<C, S>(columns: &[C], options: &TableOptions) -> Result<Vec<usize>>
where
    C: AsRef<[S]>,
    S: AsRef<str>,
{
    let columns: Vec<&[S]> = columns.iter().map(AsRef::as_ref).collect();
    row_count(&columns)?;
    compute_widths(&columns, options)
}

/// Number of rows shared by all columns.
fn row_count<S>(columns: &[&[S]]) -> Result<usize> {
    let first = columns.first().ok_or_else(|| {
        MisctoolsError::InvalidArgument("a table needs at least one column".to_string())
    })?;
    let expected = first.len();
    for (column, cells) in columns.iter().enumerate().skip(1) {
        if cells.len() != expected {
            return Err(MisctoolsError::ShapeMismatch {
                column,
                expected,
                found: cells.len(),
            });
        }
    }
    Ok(expected)
}

fn max_chars<S: AsRef<str>>(cells: &[S]) -> usize {
    cells
        .iter()
        .map(|cell| cell.as_ref().chars().count())
        .max()
        .unwrap_or(0)
}

fn compute_widths<S: AsRef<str>>(columns: &[&[S]], options: &TableOptions) -> Result<Vec<usize>> {
    let first = max_chars(columns[0]);
    let wrapped = columns.len() - 1;
    let mut widths = vec![first];
    if wrapped == 0 {
        return Ok(widths);
    }

    let reserved = options
        .space
        .checked_mul(wrapped)
        .and_then(|spacing| spacing.checked_add(first))
        .ok_or_else(|| {
            MisctoolsError::InvalidArgument(format!(
                "column spacing {} is too large",
                options.space
            ))
        })?;
    let remaining = options
        .width
        .checked_sub(reserved)
        .filter(|&remaining| remaining >= wrapped)
        .ok_or_else(|| {
            MisctoolsError::InvalidArgument(format!(
                "table width {} leaves no room for {} wrapped column(s) after {} reserved characters",
                options.width, wrapped, reserved
            ))
        })?;

    // One character each, then the rest in proportion to content length
    let weights: Vec<usize> = columns[1..]
        .iter()
        .map(|cells| max_chars(cells).max(1))
        .collect();
    let total_weight: usize = weights.iter().sum();
    let extra = remaining - wrapped;
    let mut shares: Vec<usize> = weights
        .iter()
        .map(|&weight| 1 + (extra as u128 * weight as u128 / total_weight as u128) as usize)
        .collect();
    let leftover = remaining - shares.iter().sum::<usize>();
    for share in shares.iter_mut().take(leftover) {
        *share += 1;
    }

    widths.extend(shares);
    Ok(widths)
}

/// Render one logical row into per-column physical lines.
///
/// Every column in the result has the same number of lines. Lines of the
/// last column are not padded to its width unless they are filler.
pub(crate) fn render_row<S: AsRef<str>>(
    columns: &[&[S]],
    irow: usize,
    widths: &[usize],
) -> Result<Vec<Vec<String>>> {
    let last = columns.len() - 1;
    let mut cells = Vec::with_capacity(columns.len());
    for (icol, column) in columns.iter().enumerate() {
        let item = column[irow].as_ref();
        let width = widths[icol];
        let lines: Vec<String> = if icol == 0 {
            vec![format!("{:<width$}", item)]
        } else {
            wrap_lines(item, width)?
                .into_iter()
                .map(|line| {
                    if icol == last {
                        line.into_owned()
                    } else {
                        format!("{:<width$}", line)
                    }
                })
                .collect()
        };
        cells.push(lines);
    }

    let height = cells.iter().map(Vec::len).max().unwrap_or(1);
    for (lines, &width) in cells.iter_mut().zip(widths) {
        lines.resize(height, " ".repeat(width));
    }
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn greek() -> Vec<Vec<&'static str>> {
        vec![
            vec!["Name", "alpha", "beta"],
            vec![
                "Description",
                "first letter",
                "second letter of the greek alphabet",
            ],
        ]
    }

    #[test]
    fn test_tabulate_two_columns_with_header() {
        let table = tabulate(&greek(), &TableOptions::new().width(30)).unwrap();
        let expected = [
            "=====  =======================",
            "Name   Description",
            "=====  =======================",
            "alpha  first letter",
            "beta   second letter of the",
            "       greek alphabet",
            "=====  =======================",
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_tabulate_single_row_without_header() {
        let columns = vec![vec!["a"], vec!["b"]];
        let table = tabulate(&columns, &TableOptions::new().header(false)).unwrap();
        let border = format!("=  {}", "=".repeat(76));
        assert_eq!(table, format!("{}\na  b", border));
    }

    #[test]
    fn test_tabulate_two_rows_has_no_trailing_border() {
        let columns = vec![vec!["key", "x"], vec!["value", "y"]];
        let table = tabulate(&columns, &TableOptions::new().width(12)).unwrap();
        assert_eq!(table, "===  =======\nkey  value\n===  =======\nx    y");
    }

    #[test]
    fn test_tabulate_three_columns_pads_middle_column() {
        let columns = vec![
            vec!["k", "a"],
            vec!["vv", "one two three"],
            vec!["w", "x"],
        ];
        let options = TableOptions::new().width(12).space(1).header(false);
        assert_eq!(column_widths(&columns, &options).unwrap(), vec![1, 8, 1]);

        let table = tabulate(&columns, &options).unwrap();
        let expected = [
            "= ======== =".to_string(),
            ["k", " ", "vv      ", " ", "w"].concat(),
            ["a", " ", "one two ", " ", "x"].concat(),
            [" ", " ", "three   ", " ", " "].concat(),
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_column_widths_proportional() {
        let columns = vec![
            vec!["id", "1"],
            vec!["short", "x"],
            vec!["a much longer text", "y"],
        ];
        let widths = column_widths(&columns, &TableOptions::new().width(40)).unwrap();
        assert_eq!(widths[0], 2);
        assert_eq!(widths.iter().sum::<usize>() + 2 * 2, 40);
        assert!(widths[2] > widths[1]);
    }

    #[test]
    fn test_column_widths_two_columns_take_everything() {
        let widths = column_widths(&greek(), &TableOptions::new()).unwrap();
        assert_eq!(widths, vec![5, 79 - 5 - 2]);
    }

    #[test]
    fn test_single_column_is_not_wrapped() {
        let columns = vec![vec!["head", "a longer cell", "c", "d"]];
        let table = tabulate(&columns, &TableOptions::new().width(5)).unwrap();
        let border = "=".repeat(13);
        let expected = [
            border.clone(),
            format!("{:<13}", "head"),
            border.clone(),
            "a longer cell".to_string(),
            format!("{:<13}", "c"),
            format!("{:<13}", "d"),
            border,
        ]
        .join("\n");
        assert_eq!(table, expected);
    }

    #[test]
    fn test_empty_cell_renders_blank_line() {
        let columns = vec![vec!["a", "b"], vec!["", "text"]];
        let table = tabulate(&columns, &TableOptions::new().width(10).header(false)).unwrap();
        assert_eq!(table, "=  =======\na  \nb  text");
    }

    #[test]
    fn test_zero_rows_is_border_only() {
        let columns: Vec<Vec<&str>> = vec![vec![], vec![]];
        let table = tabulate(&columns, &TableOptions::new().width(10)).unwrap();
        assert_eq!(table, format!("  {}", "=".repeat(8)));
    }

    #[test]
    fn test_shape_mismatch() {
        let columns = vec![vec!["a", "b"], vec!["c"]];
        assert_eq!(
            tabulate(&columns, &TableOptions::new()),
            Err(MisctoolsError::ShapeMismatch {
                column: 1,
                expected: 2,
                found: 1,
            })
        );
    }

    #[test]
    fn test_zero_columns() {
        let columns: Vec<Vec<&str>> = vec![];
        assert!(matches!(
            tabulate(&columns, &TableOptions::new()),
            Err(MisctoolsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_wrapped_cell_newlines_become_spaces() {
        let columns = vec![vec!["k"], vec!["a\nb"]];
        let table = tabulate(&columns, &TableOptions::new().width(10).header(false)).unwrap();
        assert_eq!(table, "=  =======\nk  a b");
    }

    #[test]
    fn test_wrapped_cell_splits_long_word_at_width() {
        let columns = vec![vec!["k"], vec!["abc/defgh"]];
        let table = tabulate(&columns, &TableOptions::new().width(9).header(false)).unwrap();
        assert_eq!(table, "=  ======\nk  abc/de\n   fgh");
    }

    #[test]
    fn test_huge_spacing_is_rejected() {
        let columns = vec![vec!["a"], vec!["b"]];
        let options = TableOptions::new().space(usize::MAX);
        assert!(matches!(
            tabulate(&columns, &options),
            Err(MisctoolsError::InvalidArgument(_))
        ));

        let three = vec![vec!["a"], vec!["b"], vec!["c"]];
        let options = TableOptions::new().space(usize::MAX / 2 + 1);
        assert!(matches!(
            column_widths(&three, &options),
            Err(MisctoolsError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_single_column_ignores_spacing() {
        let columns = vec![vec!["a"]];
        let options = TableOptions::new().space(usize::MAX).header(false);
        assert_eq!(tabulate(&columns, &options).unwrap(), "=\na");
    }

    #[test]
    fn test_width_too_narrow() {
        let columns = vec![vec!["a rather long label"], vec!["x"]];
        assert!(matches!(
            tabulate(&columns, &TableOptions::new().width(10)),
            Err(MisctoolsError::InvalidArgument(_))
        ));
    }
}
