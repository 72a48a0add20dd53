//! numfmt - human-readable number formatting
//!
//! Renders numbers with locale digit grouping and bounded fraction digits,
//! or abbreviated with K/M magnitude suffixes.
//!
//! ```
//! use numfmt::{format_abbreviated, format_locale};
//!
//! assert_eq!(format_locale(1234.5678, 2), "1,234.57");
//! assert_eq!(format_abbreviated(999_999.0), "1,000K");
//! ```

pub mod config;
pub mod format;
pub mod logging;

pub use format::{format_abbreviated, format_locale, NumberFormatter, DEFAULT_PRECISION};
