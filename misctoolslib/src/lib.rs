//! # misctoolslib
//!
//! Formatting and data-shaping helpers for scientific toolkits.
//!
//! ## Overview
//!
//! Every function here is a pure transformation from input data to a string
//! or a map. Nothing keeps state between calls.
//!
//! - **Range strings**: compress integer lists into runs (`1 to 4 10 15 to 17`)
//!   and expand them back
//! - **Tables**: lay out columns of text as a bordered, word-wrapped table
//! - **Text**: identifier-safe strings (`alnum`) and wrap-and-join
//! - **Markup**: lookup tables from the children of a markup node
//! - **Capabilities**: resolve an optional backend from a prioritized
//!   provider chain
//!
//! ## Example
//!
//! ```rust
//! use misctoolslib::{range_string, tabulate, RangeOptions, TableOptions};
//!
//! let residues = [1, 2, 3, 4, 10, 15, 16, 17];
//! let ranges = range_string(residues, &RangeOptions::new()).unwrap();
//! assert_eq!(ranges, "1 to 4 10 15 to 17");
//!
//! let table = tabulate(
//!     &[vec!["Chain", "A"], vec!["Residues", ranges.as_str()]],
//!     &TableOptions::new().width(30),
//! )
//! .unwrap();
//! assert!(table.contains("A      1 to 4 10 15 to 17"));
//! ```

pub mod capability;
pub mod error;
pub mod markup;
pub mod options;
pub mod range;
pub mod table;
pub mod text;


pub use capability::{
    import_linear_algebra_backend, CapabilityProvider, FnProvider, ProviderChain, LINEAR_ALGEBRA,
};
pub use error::MisctoolsError;
pub use markup::{dict_from_children, ChildValue, Element, MarkupNode};
pub use options::{RangeOptions, RangeStyle, TableOptions};
pub use range::{compress_runs, parse_range_string, range_string, Run};
pub use table::{column_widths, tabulate};
pub use text::{alnum, wrap_and_join, wrap_lines, Everything};

/// Result type for misctoolslib operations
pub type Result<T> = std::result::Result<T, MisctoolsError>;
