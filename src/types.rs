//! Type definitions for number pattern compilation
//!
//! This module defines the data model shared by the pattern parser, the
//! properties resolver, and the format/parse engines: the parsed pattern
//! shape, the digit-layout union, caller options, and locale symbols.

/// Rounding mode applied when digits beyond the kept precision are dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoundingMode {
    /// Round toward positive infinity
    Ceil,
    /// Round toward negative infinity
    Floor,
    /// Round to nearest, ties away from zero
    #[default]
    Round,
    /// Round toward zero
    Truncate,
}

/// Digit layout of a sub-pattern
///
/// The two shapes are mutually exclusive: a pattern either fixes integer and
/// fraction digit counts (`"#,##0.##"`) or significant digit counts
/// (`"@@#"`). Presence of `@` in the pattern selects significant mode.
#[derive(Debug, Clone, PartialEq)]
pub enum DigitLayout {
    /// Fixed integer/fraction digit counts
    IntegerFraction {
        /// Minimum digits left of the decimal point, zero-padded to this
        minimum_integer_digits: usize,
        /// Minimum digits right of the decimal point, zero-padded to this
        minimum_fraction_digits: usize,
        /// Fraction digits are rounded away beyond this count
        maximum_fraction_digits: usize,
        /// Group sizes right-to-left from the decimal point; empty when the
        /// pattern has no grouping markers
        grouping_sizes: Vec<usize>,
        /// Round to the nearest multiple of this increment instead of to
        /// `maximum_fraction_digits` (pattern `"0.05"` rounds to 0.05 steps)
        round_increment: Option<f64>,
    },
    /// Significant digit counts, measured from the first non-zero digit
    Significant {
        /// Output is zero-padded up to this many significant digits
        minimum_significant_digits: usize,
        /// Digits beyond this count are rounded away
        maximum_significant_digits: usize,
    },
}

/// One half of a number pattern: affixes plus the digit layout between them
#[derive(Debug, Clone, PartialEq)]
pub struct SubPattern {
    /// Literal text before the digits; `%`, `‰`, `-` and `+` are replaced
    /// with locale symbols at format time
    pub prefix: String,
    /// Literal text after the digits
    pub suffix: String,
    /// Digit layout between the affixes
    pub layout: DigitLayout,
}

/// A parsed number pattern: positive sub-pattern plus an optional explicit
/// negative sub-pattern (`"0.##;(0.##)"`)
///
/// Only the negative sub-pattern's affixes are ever consulted; its digit
/// layout carries no meaning in the pattern dialect.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberPattern {
    /// Sub-pattern applied to non-negative values
    pub positive: SubPattern,
    /// Sub-pattern supplying affixes for negative values, if given
    pub negative: Option<SubPattern>,
}

/// Multiplier implied by a `%` or `‰` literal in the pattern affixes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScaleUnit {
    /// No scaling
    #[default]
    Unit,
    /// Scale by 100 when formatting, divide back when parsing
    Percent,
    /// Scale by 1000 when formatting, divide back when parsing
    PerMille,
}

/// Standard pattern family selected when no raw pattern is supplied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NumberStyle {
    /// The locale's plain decimal pattern
    #[default]
    Decimal,
    /// The locale's percent pattern
    Percent,
}

/// Caller options merged over the pattern-derived digit layout
///
/// Every field is optional; an unset field keeps the value the pattern
/// implies. Supplying both significant-digit bounds switches an
/// integer/fraction pattern into significant mode; supplying exactly one is
/// rejected at construction.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormatOptions {
    /// Pattern family used by the style-based constructors
    pub style: NumberStyle,
    /// Overrides the pattern's minimum integer digits (1..=21)
    pub minimum_integer_digits: Option<usize>,
    /// Overrides the pattern's minimum fraction digits (0..=20)
    pub minimum_fraction_digits: Option<usize>,
    /// Overrides the pattern's maximum fraction digits (0..=20)
    pub maximum_fraction_digits: Option<usize>,
    /// Minimum significant digits (1..=21); requires the maximum as well
    pub minimum_significant_digits: Option<usize>,
    /// Maximum significant digits (1..=21); requires the minimum as well
    pub maximum_significant_digits: Option<usize>,
    /// Rounding mode, `Round` when unset
    pub round: Option<RoundingMode>,
    /// Set to `false` to suppress the pattern's grouping separators
    pub use_grouping: Option<bool>,
}

/// Locale symbols consumed by the formatter and the parser
///
/// The caller is responsible for the values being complete and consistent;
/// no validation happens here. `digits` maps ASCII `0`..`9` to the active
/// numbering system's glyphs and is the identity for Latin digits.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleSymbols {
    /// Decimal separator
    pub decimal: String,
    /// Grouping separator
    pub group: String,
    /// Percent sign substituted for a `%` affix literal
    pub percent_sign: String,
    /// Per-mille sign substituted for a `‰` affix literal
    pub per_mille: String,
    /// Minus sign substituted for a `-` affix literal
    pub minus_sign: String,
    /// Plus sign substituted for a `+` affix literal
    pub plus_sign: String,
    /// Token emitted for infinite values
    pub infinity: String,
    /// Token emitted for NaN
    pub nan: String,
    /// Digit glyphs for the locale's numbering system
    pub digits: [char; 10],
    /// The locale's standard decimal pattern
    pub decimal_pattern: String,
    /// The locale's standard percent pattern
    pub percent_pattern: String,
}

impl Default for LocaleSymbols {
    fn default() -> Self {
        LocaleSymbols {
            decimal: ".".to_string(),
            group: ",".to_string(),
            percent_sign: "%".to_string(),
            per_mille: "\u{2030}".to_string(),
            minus_sign: "-".to_string(),
            plus_sign: "+".to_string(),
            infinity: "\u{221e}".to_string(),
            nan: "NaN".to_string(),
            digits: ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'],
            decimal_pattern: "#,##0.###".to_string(),
            percent_pattern: "#,##0%".to_string(),
        }
    }
}

impl LocaleSymbols {
    /// Maps a numbering-system glyph (or an ASCII digit) back to its value
    pub fn digit_value(&self, glyph: char) -> Option<u32> {
        if glyph.is_ascii_digit() {
            return glyph.to_digit(10);
        }
        self.digits
            .iter()
            .position(|d| *d == glyph)
            .map(|pos| pos as u32)
    }
}
