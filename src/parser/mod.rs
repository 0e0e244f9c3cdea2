//! Number string parsing
//!
//! The inverse of the formatter: tokenizes a candidate string against the
//! compiled pattern's affixes and the locale symbols, and reconstructs the
//! numeric value. Parsing is deliberately loose where the formatter is
//! strict: grouping separators may appear anywhere or not at all, ASCII
//! digits are accepted alongside the locale's glyphs, and BIDI control
//! characters are ignored.

use crate::CompileError;
use crate::formatter::render_affix;
use crate::pattern::parse_pattern;
use crate::properties::{FormatProperties, resolve_properties};
use crate::types::{FormatOptions, LocaleSymbols, NumberStyle, ScaleUnit};

/// A compiled number parser
///
/// Construction mirrors [`NumberFormatter`](crate::NumberFormatter) and can
/// fail on the same pattern/option errors; `parse` itself never fails with
/// an error, it reports unrecognized input through the NaN sentinel.
#[derive(Debug, Clone)]
pub struct NumberParser {
    properties: FormatProperties,
    symbols: LocaleSymbols,
}

impl NumberParser {
    /// Compile the locale's standard pattern for the style in `options`
    pub fn new(
        symbols: &LocaleSymbols,
        options: &FormatOptions,
    ) -> Result<NumberParser, CompileError> {
        let pattern = match options.style {
            NumberStyle::Decimal => symbols.decimal_pattern.clone(),
            NumberStyle::Percent => symbols.percent_pattern.clone(),
        };
        NumberParser::from_pattern(&pattern, symbols, options)
    }

    /// Compile a raw pattern string
    pub fn from_pattern(
        pattern: &str,
        symbols: &LocaleSymbols,
        options: &FormatOptions,
    ) -> Result<NumberParser, CompileError> {
        let parsed = parse_pattern(pattern)?;
        let properties = resolve_properties(&parsed, options)?;
        Ok(NumberParser {
            properties,
            symbols: symbols.clone(),
        })
    }

    /// The resolved properties this parser runs on
    pub fn properties(&self) -> &FormatProperties {
        &self.properties
    }

    /// Parse a locale-formatted string
    ///
    /// Returns the numeric value, `f64::INFINITY`/`f64::NEG_INFINITY` for
    /// the locale's signed infinity token, and `f64::NAN` both for the
    /// locale's NaN token and for any input that does not match; check
    /// with `is_nan`. Never panics.
    ///
    /// # Examples
    /// ```
    /// use number_pattern::types::{FormatOptions, LocaleSymbols};
    /// use number_pattern::NumberParser;
    ///
    /// let parser = NumberParser::from_pattern(
    ///     "#,##0.##",
    ///     &LocaleSymbols::default(),
    ///     &FormatOptions::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(parser.parse("12,735.46"), 12735.46);
    /// assert!(parser.parse("twelve").is_nan());
    /// ```
    pub fn parse(&self, value: &str) -> f64 {
        let input = strip_bidi(value);

        if input == strip_bidi(&self.symbols.nan) {
            return f64::NAN;
        }

        for (prefix, suffix, sign) in self.affix_candidates() {
            if let Some(number) = self.parse_body(&input, &prefix, &suffix, sign) {
                return number;
            }
        }
        f64::NAN
    }

    // The negative affix pair disambiguates the sign, so it is tried first
    // whenever it differs from the positive pair.
    fn affix_candidates(&self) -> Vec<(String, String, f64)> {
        let symbols = &self.symbols;
        let positive = (
            strip_bidi(&render_affix(&self.properties.positive_prefix, symbols)),
            strip_bidi(&render_affix(&self.properties.positive_suffix, symbols)),
            1.0,
        );
        let negative = (
            strip_bidi(&render_affix(&self.properties.negative_prefix, symbols)),
            strip_bidi(&render_affix(&self.properties.negative_suffix, symbols)),
            -1.0,
        );
        if negative.0 == positive.0 && negative.1 == positive.1 {
            vec![positive]
        } else {
            vec![negative, positive]
        }
    }

    fn parse_body(&self, input: &str, prefix: &str, suffix: &str, sign: f64) -> Option<f64> {
        let symbols = &self.symbols;
        let rest = input.strip_prefix(prefix)?;
        let rest = rest.strip_suffix(suffix)?;

        if rest == strip_bidi(&symbols.infinity) {
            return Some(sign * f64::INFINITY);
        }

        let decimal = strip_bidi(&symbols.decimal);
        let group = strip_bidi(&symbols.group);
        let percent = strip_bidi(&symbols.percent_sign);
        let per_mille = strip_bidi(&symbols.per_mille);
        let plus = strip_bidi(&symbols.plus_sign);

        let mut number = String::new();
        let mut seen_decimal = false;
        let mut explicit_scale: Option<f64> = None;
        let mut index = 0;
        while index < rest.len() {
            let tail = &rest[index..];
            let c = tail.chars().next()?;
            if let Some(digit) = symbols.digit_value(c) {
                number.push(char::from_digit(digit, 10)?);
                index += c.len_utf8();
                continue;
            }
            if number.is_empty() && !seen_decimal && !plus.is_empty() && tail.starts_with(&plus) {
                index += plus.len();
                continue;
            }
            // Grouping separators are skipped; their placement is not
            // validated.
            if !seen_decimal && !group.is_empty() && tail.starts_with(&group) {
                index += group.len();
                continue;
            }
            if !seen_decimal && !decimal.is_empty() && tail.starts_with(&decimal) {
                seen_decimal = true;
                number.push('.');
                index += decimal.len();
                continue;
            }
            // A trailing percent or per-mille sign scales the value even
            // when the pattern itself carries no such literal.
            if explicit_scale.is_none() && !percent.is_empty() && tail == percent {
                explicit_scale = Some(100.0);
                break;
            }
            if explicit_scale.is_none() && !per_mille.is_empty() && tail == per_mille {
                explicit_scale = Some(1000.0);
                break;
            }
            return None;
        }

        if number.is_empty() {
            return None;
        }
        let magnitude: f64 = number.parse().ok()?;
        let divisor = explicit_scale.unwrap_or(match self.properties.scale {
            ScaleUnit::Percent => 100.0,
            ScaleUnit::PerMille => 1000.0,
            ScaleUnit::Unit => 1.0,
        });
        Some(sign * magnitude / divisor)
    }
}

// LRM, RLM and ALM only steer BIDI rendering; both input and expected
// tokens drop them before matching so right-to-left locales parse.
fn strip_bidi(text: &str) -> String {
    text.chars()
        .filter(|c| !matches!(c, '\u{200e}' | '\u{200f}' | '\u{061c}'))
        .collect()
}
