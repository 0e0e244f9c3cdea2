//! Number formatting
//!
//! This module turns resolved properties plus locale symbols into the
//! formatting side of the engine. The main entry point is
//! [`NumberFormatter`], built once per pattern and reusable for any number
//! of values.

pub(crate) mod digits;

use crate::CompileError;
use crate::formatter::digits::{insert_grouping, integer_fraction_digits, significant_digits};
use crate::pattern::parse_pattern;
use crate::properties::{FormatProperties, resolve_properties};
use crate::types::{DigitLayout, FormatOptions, LocaleSymbols, NumberStyle, ScaleUnit};

/// A compiled number formatter
///
/// Owns the resolved properties and a copy of the locale symbols; once
/// constructed it is immutable, and `format` is a pure function, so a
/// formatter can be shared freely across threads.
#[derive(Debug, Clone)]
pub struct NumberFormatter {
    properties: FormatProperties,
    symbols: LocaleSymbols,
}

impl NumberFormatter {
    /// Compile the locale's standard pattern for the style in `options`
    pub fn new(
        symbols: &LocaleSymbols,
        options: &FormatOptions,
    ) -> Result<NumberFormatter, CompileError> {
        let pattern = match options.style {
            NumberStyle::Decimal => symbols.decimal_pattern.clone(),
            NumberStyle::Percent => symbols.percent_pattern.clone(),
        };
        NumberFormatter::from_pattern(&pattern, symbols, options)
    }

    /// Compile a raw pattern string
    ///
    /// # Examples
    /// ```
    /// use number_pattern::types::{FormatOptions, LocaleSymbols};
    /// use number_pattern::NumberFormatter;
    ///
    /// let formatter = NumberFormatter::from_pattern(
    ///     "#,##0.##",
    ///     &LocaleSymbols::default(),
    ///     &FormatOptions::default(),
    /// )
    /// .unwrap();
    /// assert_eq!(formatter.format(12735.456), "12,735.46");
    /// ```
    pub fn from_pattern(
        pattern: &str,
        symbols: &LocaleSymbols,
        options: &FormatOptions,
    ) -> Result<NumberFormatter, CompileError> {
        let parsed = parse_pattern(pattern)?;
        let properties = resolve_properties(&parsed, options)?;
        Ok(NumberFormatter {
            properties,
            symbols: symbols.clone(),
        })
    }

    /// The resolved properties this formatter runs on
    pub fn properties(&self) -> &FormatProperties {
        &self.properties
    }

    /// Format a value
    ///
    /// Total over all of `f64`: finite values go through digit generation,
    /// NaN and the infinities map to their locale tokens.
    pub fn format(&self, value: f64) -> String {
        let properties = &self.properties;
        let symbols = &self.symbols;

        if value.is_nan() {
            return symbols.nan.clone();
        }

        let negative = value < 0.0;
        let (prefix, suffix) = if negative {
            (&properties.negative_prefix, &properties.negative_suffix)
        } else {
            (&properties.positive_prefix, &properties.positive_suffix)
        };
        let prefix = render_affix(prefix, symbols);
        let suffix = render_affix(suffix, symbols);

        if value.is_infinite() {
            return format!("{prefix}{}{suffix}", symbols.infinity);
        }

        let scaled = match properties.scale {
            ScaleUnit::Percent => value * 100.0,
            ScaleUnit::PerMille => value * 1000.0,
            ScaleUnit::Unit => value,
        };

        let (text, grouping_sizes) = match &properties.layout {
            DigitLayout::Significant {
                minimum_significant_digits,
                maximum_significant_digits,
            } => (
                significant_digits(
                    scaled,
                    *minimum_significant_digits,
                    *maximum_significant_digits,
                    properties.rounding,
                ),
                &[][..],
            ),
            DigitLayout::IntegerFraction {
                minimum_integer_digits,
                minimum_fraction_digits,
                maximum_fraction_digits,
                grouping_sizes,
                round_increment,
            } => (
                integer_fraction_digits(
                    scaled,
                    *minimum_integer_digits,
                    *minimum_fraction_digits,
                    *maximum_fraction_digits,
                    properties.rounding,
                    *round_increment,
                ),
                grouping_sizes.as_slice(),
            ),
        };

        // Localize the digit glyphs before grouping so separators that look
        // like ASCII punctuation (`.` in many locales) are never remapped.
        let (integer, fraction) = match text.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (text.as_str(), None),
        };
        let mut body = map_digits(integer, symbols);
        if properties.use_grouping && !grouping_sizes.is_empty() {
            body = insert_grouping(&body, grouping_sizes, &symbols.group);
        }
        if let Some(fraction) = fraction {
            body.push_str(&symbols.decimal);
            body.push_str(&map_digits(fraction, symbols));
        }

        format!("{prefix}{body}{suffix}")
    }
}

/// Substitute locale symbols for the symbolic affix literals
pub(crate) fn render_affix(affix: &str, symbols: &LocaleSymbols) -> String {
    let mut out = String::with_capacity(affix.len());
    for c in affix.chars() {
        match c {
            '%' => out.push_str(&symbols.percent_sign),
            '\u{2030}' => out.push_str(&symbols.per_mille),
            '-' => out.push_str(&symbols.minus_sign),
            '+' => out.push_str(&symbols.plus_sign),
            _ => out.push(c),
        }
    }
    out
}

// Maps ASCII digits to the locale's numbering-system glyphs.
fn map_digits(text: &str, symbols: &LocaleSymbols) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_digit() {
                symbols.digits[(c as u8 - b'0') as usize]
            } else {
                c
            }
        })
        .collect()
}
