//! Locale-aware number formatting and parsing driven by number patterns
//!
//! A pattern string (`"#,##0.##"`, `"@@#"`, `"0%"`) plus a set of locale
//! symbols compile into a [`NumberFormatter`] or [`NumberParser`]. The
//! pattern is parsed once; the returned value is immutable and reusable.
//!
//! ```
//! use number_pattern::locale::get_locale_symbols;
//! use number_pattern::{FormatOptions, NumberFormatter, NumberParser};
//!
//! let symbols = get_locale_symbols("en").unwrap();
//! let options = FormatOptions::default();
//!
//! let formatter = NumberFormatter::from_pattern("#,##0.##", &symbols, &options).unwrap();
//! assert_eq!(formatter.format(12735.456), "12,735.46");
//!
//! let parser = NumberParser::from_pattern("#,##0.##", &symbols, &options).unwrap();
//! assert_eq!(parser.parse("12,735.46"), 12735.46);
//! ```

pub mod formatter;
pub mod locale;
pub mod parser;
pub mod pattern;
pub mod properties;
pub mod round;
pub mod types;

pub use formatter::NumberFormatter;
pub use parser::NumberParser;
pub use pattern::{PatternError, parse_pattern};
pub use properties::{FormatProperties, ValidationError, resolve_properties};
pub use types::*;

use thiserror::Error;

/// Construction-time failure: pattern syntax or option validation
///
/// Formatting and parsing themselves never fail once construction
/// succeeded.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompileError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
