//! Properties resolution
//!
//! Merges the digit layout a pattern implies with caller-supplied
//! [`FormatOptions`] into one validated, immutable [`FormatProperties`]
//! record. The same resolver feeds formatter and parser construction.

use thiserror::Error;

use crate::types::{DigitLayout, FormatOptions, NumberPattern, RoundingMode, ScaleUnit};

/// Resolved formatting/parsing properties, immutable once built
#[derive(Debug, Clone, PartialEq)]
pub struct FormatProperties {
    /// Digit layout after overrides and validation
    pub layout: DigitLayout,
    /// Rounding mode for dropped digits
    pub rounding: RoundingMode,
    /// Whether grouping separators are emitted at all
    pub use_grouping: bool,
    /// Affixes applied to non-negative values
    pub positive_prefix: String,
    pub positive_suffix: String,
    /// Affixes applied to negative values; defaults to the positive pair
    /// with a prepended minus when the pattern has no negative sub-pattern
    pub negative_prefix: String,
    pub negative_suffix: String,
    /// Percent/per-mille scaling implied by the affixes
    pub scale: ScaleUnit,
}

/// Digit-bound and mode-conflict errors, surfaced at construction time
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A digit bound outside its documented range
    #[error("{name} must be between {minimum} and {maximum}, got {value}")]
    OutOfRange {
        name: &'static str,
        value: usize,
        minimum: usize,
        maximum: usize,
    },
    /// Exactly one of the two significant-digit bounds was supplied
    #[error("Neither or both the minimum and maximum significant digits must be present")]
    LoneSignificantBound,
}

/// Resolve a parsed pattern plus options into final properties
///
/// Pattern-derived values act as defaults and each supplied option overrides
/// its field. Supplying both significant-digit bounds switches an
/// integer/fraction pattern into significant mode. Resolution is
/// deterministic: identical inputs produce field-for-field identical output.
pub fn resolve_properties(
    pattern: &NumberPattern,
    options: &FormatOptions,
) -> Result<FormatProperties, ValidationError> {
    let (
        mut minimum_integer_digits,
        mut minimum_fraction_digits,
        mut maximum_fraction_digits,
        grouping_sizes,
        round_increment,
    ) = match &pattern.positive.layout {
        DigitLayout::IntegerFraction {
            minimum_integer_digits,
            minimum_fraction_digits,
            maximum_fraction_digits,
            grouping_sizes,
            round_increment,
        } => (
            *minimum_integer_digits,
            *minimum_fraction_digits,
            *maximum_fraction_digits,
            grouping_sizes.clone(),
            *round_increment,
        ),
        // Defaults in case options switch the mode back.
        DigitLayout::Significant { .. } => (1, 0, 3, Vec::new(), None),
    };
    let (mut minimum_significant_digits, mut maximum_significant_digits) =
        match &pattern.positive.layout {
            DigitLayout::Significant {
                minimum_significant_digits,
                maximum_significant_digits,
            } => (
                Some(*minimum_significant_digits),
                Some(*maximum_significant_digits),
            ),
            DigitLayout::IntegerFraction { .. } => (None, None),
        };

    if let Some(value) = options.minimum_integer_digits {
        minimum_integer_digits = value;
    }
    if let Some(value) = options.minimum_fraction_digits {
        minimum_fraction_digits = value;
    }
    if let Some(value) = options.maximum_fraction_digits {
        maximum_fraction_digits = value;
    }
    if let Some(value) = options.minimum_significant_digits {
        minimum_significant_digits = Some(value);
    }
    if let Some(value) = options.maximum_significant_digits {
        maximum_significant_digits = Some(value);
    }

    // When only one fraction bound is overridden the other follows it.
    match (
        options.minimum_fraction_digits.is_some(),
        options.maximum_fraction_digits.is_some(),
    ) {
        (true, false) => {
            maximum_fraction_digits = maximum_fraction_digits.max(minimum_fraction_digits);
        }
        (false, true) => {
            minimum_fraction_digits = minimum_fraction_digits.min(maximum_fraction_digits);
        }
        _ => {}
    }

    let layout = match (minimum_significant_digits, maximum_significant_digits) {
        (Some(minimum), Some(maximum)) => {
            check_range("minimumSignificantDigits", minimum, 1, 21)?;
            check_range("maximumSignificantDigits", maximum, minimum, 21)?;
            DigitLayout::Significant {
                minimum_significant_digits: minimum,
                maximum_significant_digits: maximum,
            }
        }
        (None, None) => {
            check_range("minimumIntegerDigits", minimum_integer_digits, 1, 21)?;
            check_range("minimumFractionDigits", minimum_fraction_digits, 0, 20)?;
            check_range(
                "maximumFractionDigits",
                maximum_fraction_digits,
                minimum_fraction_digits,
                20,
            )?;
            DigitLayout::IntegerFraction {
                minimum_integer_digits,
                minimum_fraction_digits,
                maximum_fraction_digits,
                grouping_sizes,
                round_increment,
            }
        }
        _ => return Err(ValidationError::LoneSignificantBound),
    };

    let (negative_prefix, negative_suffix) = match &pattern.negative {
        Some(negative) => (negative.prefix.clone(), negative.suffix.clone()),
        None => (
            format!("-{}", pattern.positive.prefix),
            pattern.positive.suffix.clone(),
        ),
    };

    Ok(FormatProperties {
        layout,
        rounding: options.round.unwrap_or_default(),
        use_grouping: options.use_grouping.unwrap_or(true),
        positive_prefix: pattern.positive.prefix.clone(),
        positive_suffix: pattern.positive.suffix.clone(),
        negative_prefix,
        negative_suffix,
        scale: detect_scale(pattern),
    })
}

fn check_range(
    name: &'static str,
    value: usize,
    minimum: usize,
    maximum: usize,
) -> Result<(), ValidationError> {
    if value < minimum || value > maximum {
        return Err(ValidationError::OutOfRange {
            name,
            value,
            minimum,
            maximum,
        });
    }
    Ok(())
}

// Percent wins over per-mille when both literals occur.
fn detect_scale(pattern: &NumberPattern) -> ScaleUnit {
    let mut affixes = vec![&pattern.positive.prefix, &pattern.positive.suffix];
    if let Some(negative) = &pattern.negative {
        affixes.push(&negative.prefix);
        affixes.push(&negative.suffix);
    }
    if affixes.iter().any(|affix| affix.contains('%')) {
        ScaleUnit::Percent
    } else if affixes.iter().any(|affix| affix.contains('\u{2030}')) {
        ScaleUnit::PerMille
    } else {
        ScaleUnit::Unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pattern::parse_pattern;

    fn resolve(pattern: &str, options: &FormatOptions) -> Result<FormatProperties, ValidationError> {
        resolve_properties(&parse_pattern(pattern).unwrap(), options)
    }

    #[test]
    fn pattern_values_are_defaults() {
        let properties = resolve("#,##0.##", &FormatOptions::default()).unwrap();
        assert_eq!(
            properties.layout,
            DigitLayout::IntegerFraction {
                minimum_integer_digits: 1,
                minimum_fraction_digits: 0,
                maximum_fraction_digits: 2,
                grouping_sizes: vec![3],
                round_increment: None,
            }
        );
        assert!(properties.use_grouping);
        assert_eq!(properties.rounding, RoundingMode::Round);
    }

    #[test]
    fn lone_fraction_bound_clamps_the_other() {
        // Only the minimum given: the maximum follows it upward.
        let properties = resolve(
            "0.##",
            &FormatOptions {
                minimum_fraction_digits: Some(5),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            properties.layout,
            DigitLayout::IntegerFraction {
                minimum_integer_digits: 1,
                minimum_fraction_digits: 5,
                maximum_fraction_digits: 5,
                grouping_sizes: vec![],
                round_increment: None,
            }
        );

        // Only the maximum given: the minimum follows it downward.
        let properties = resolve(
            "0.0000",
            &FormatOptions {
                maximum_fraction_digits: Some(2),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            properties.layout,
            DigitLayout::IntegerFraction {
                minimum_integer_digits: 1,
                minimum_fraction_digits: 2,
                maximum_fraction_digits: 2,
                grouping_sizes: vec![],
                round_increment: None,
            }
        );
    }

    #[test]
    fn both_significant_bounds_switch_the_mode() {
        let properties = resolve(
            "0.##",
            &FormatOptions {
                minimum_significant_digits: Some(2),
                maximum_significant_digits: Some(4),
                ..Default::default()
            },
        )
        .unwrap();
        assert_eq!(
            properties.layout,
            DigitLayout::Significant {
                minimum_significant_digits: 2,
                maximum_significant_digits: 4,
            }
        );
    }

    #[test]
    fn lone_significant_bound_is_rejected() {
        let result = resolve(
            "0.##",
            &FormatOptions {
                minimum_significant_digits: Some(2),
                ..Default::default()
            },
        );
        assert_eq!(result, Err(ValidationError::LoneSignificantBound));
        assert_eq!(
            result.unwrap_err().to_string(),
            "Neither or both the minimum and maximum significant digits must be present"
        );
    }

    #[test]
    fn out_of_range_bounds_are_rejected() {
        assert!(matches!(
            resolve(
                "0",
                &FormatOptions {
                    minimum_integer_digits: Some(22),
                    ..Default::default()
                },
            ),
            Err(ValidationError::OutOfRange {
                name: "minimumIntegerDigits",
                ..
            })
        ));
        assert!(matches!(
            resolve(
                "@@",
                &FormatOptions {
                    maximum_significant_digits: Some(22),
                    ..Default::default()
                },
            ),
            Err(ValidationError::OutOfRange {
                name: "maximumSignificantDigits",
                ..
            })
        ));
    }

    #[test]
    fn missing_negative_sub_pattern_prepends_minus() {
        let properties = resolve("0.##", &FormatOptions::default()).unwrap();
        assert_eq!(properties.negative_prefix, "-");
        assert_eq!(properties.negative_suffix, "");

        let properties = resolve("0.##;(0.##)", &FormatOptions::default()).unwrap();
        assert_eq!(properties.negative_prefix, "(");
        assert_eq!(properties.negative_suffix, ")");
    }

    #[test]
    fn resolution_is_deterministic() {
        let options = FormatOptions {
            minimum_fraction_digits: Some(1),
            maximum_fraction_digits: Some(4),
            round: Some(RoundingMode::Floor),
            ..Default::default()
        };
        assert_eq!(
            resolve("#,##0.##", &options).unwrap(),
            resolve("#,##0.##", &options).unwrap()
        );
    }
}
