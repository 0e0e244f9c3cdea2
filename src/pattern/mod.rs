//! Number pattern parsing
//!
//! Turns a raw pattern string (`"#,##0.##"`, `"@@#"`, `"0.##;(0.##)"`) into
//! the [`NumberPattern`] data model: a positive sub-pattern and an optional
//! negative sub-pattern, each with prefix, suffix and digit layout.

pub mod sections;
pub mod tokens;

use thiserror::Error;

use crate::pattern::sections::{raw_sub_pattern, sub_pattern_from_raw};
use crate::types::{NumberPattern, SubPattern};

/// Pattern syntax errors, surfaced at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PatternError {
    /// No digit placeholder anywhere in a sub-pattern
    #[error("number pattern `{pattern}` has no digit layout")]
    MissingDigits { pattern: String },
    /// `@` mixed with `0` or a decimal marker in one layout
    #[error("number pattern `{pattern}` mixes `@` with `{glyph}` in one digit layout")]
    MixedDigitModes { pattern: String, glyph: char },
    /// `@` reappears after the optional digits that close a significant run
    #[error("number pattern `{pattern}` repeats `@` after optional digits")]
    BrokenSignificantRun { pattern: String },
    /// `0` and `#` in an order the dialect does not allow
    #[error("number pattern `{pattern}` has `0` and `#` digits out of order")]
    DigitsOutOfOrder { pattern: String },
    /// More than one `;` separator
    #[error("number pattern `{pattern}` has more than one `;` separator")]
    TooManySubPatterns { pattern: String },
    /// Characters left over after the suffix of the last sub-pattern
    #[error("number pattern `{pattern}` has trailing characters `{rest}`")]
    TrailingCharacters { pattern: String, rest: String },
}

/// Parse a number pattern string
///
/// This is the entry point of the module. The pattern is split on the single
/// optional `;` into positive and negative halves, and each half is parsed
/// into prefix, digit layout and suffix.
///
/// # Examples
/// ```
/// use number_pattern::pattern::parse_pattern;
///
/// let pattern = parse_pattern("#,##0.##;(#,##0.##)").unwrap();
/// assert!(pattern.negative.is_some());
/// ```
pub fn parse_pattern(pattern: &str) -> Result<NumberPattern, PatternError> {
    let mut input = pattern;

    let positive = parse_half(&mut input, pattern)?;

    let mut negative = None;
    if let Some(rest) = input.strip_prefix(';') {
        input = rest;
        negative = Some(parse_half(&mut input, pattern)?);
    }

    if input.starts_with(';') {
        return Err(PatternError::TooManySubPatterns {
            pattern: pattern.to_string(),
        });
    }
    if !input.is_empty() {
        return Err(PatternError::TrailingCharacters {
            pattern: pattern.to_string(),
            rest: input.to_string(),
        });
    }

    Ok(NumberPattern { positive, negative })
}

fn parse_half(input: &mut &str, pattern: &str) -> Result<SubPattern, PatternError> {
    let raw = raw_sub_pattern(input).map_err(|_| PatternError::MissingDigits {
        pattern: pattern.to_string(),
    })?;
    sub_pattern_from_raw(raw, pattern)
}
