use winnow::combinator::opt;
use winnow::{ModalResult, Parser};

use crate::pattern::PatternError;
use crate::pattern::tokens::{affix, fraction_layout, integer_layout};
use crate::types::{DigitLayout, SubPattern};

/// One sub-pattern split into its raw pieces, before layout analysis
#[derive(Debug, Clone, PartialEq)]
pub struct RawSubPattern {
    pub prefix: String,
    pub integer: Vec<char>,
    pub fraction: Option<Vec<char>>,
    pub suffix: String,
}

/// Parse one sub-pattern: literal prefix, digit layout, literal suffix
pub fn raw_sub_pattern(input: &mut &str) -> ModalResult<RawSubPattern> {
    let prefix = affix(input)?;
    let integer = integer_layout(input)?;
    let fraction = opt(fraction_layout).parse_next(input)?;
    let suffix = affix(input)?;
    Ok(RawSubPattern {
        prefix,
        integer,
        fraction,
        suffix,
    })
}

/// Analyze the raw layout runs and produce the finished sub-pattern
///
/// Any `@` in the integer run commits the sub-pattern to significant-digit
/// mode; otherwise the runs describe integer/fraction digit counts plus
/// grouping positions.
pub fn sub_pattern_from_raw(
    raw: RawSubPattern,
    pattern: &str,
) -> Result<SubPattern, PatternError> {
    let layout = if raw.integer.contains(&'@') {
        significant_layout(&raw, pattern)?
    } else {
        integer_fraction_layout(&raw, pattern)?
    };
    Ok(SubPattern {
        prefix: raw.prefix,
        suffix: raw.suffix,
        layout,
    })
}

// Shape: optional `#`s, then the `@` run, then optional `#`s. Leading `#`
// only reserves grouping space and never counts toward the digit bounds.
fn significant_layout(raw: &RawSubPattern, pattern: &str) -> Result<DigitLayout, PatternError> {
    if raw.fraction.is_some() {
        return Err(PatternError::MixedDigitModes {
            pattern: pattern.to_string(),
            glyph: '.',
        });
    }
    let mut mandatory = 0usize;
    let mut optional = 0usize;
    for &c in &raw.integer {
        match c {
            ',' => {}
            '@' => {
                if optional > 0 {
                    return Err(PatternError::BrokenSignificantRun {
                        pattern: pattern.to_string(),
                    });
                }
                mandatory += 1;
            }
            '#' => {
                if mandatory > 0 {
                    optional += 1;
                }
            }
            '0' => {
                return Err(PatternError::MixedDigitModes {
                    pattern: pattern.to_string(),
                    glyph: '0',
                });
            }
            _ => unreachable!(),
        }
    }
    Ok(DigitLayout::Significant {
        minimum_significant_digits: mandatory,
        maximum_significant_digits: mandatory + optional,
    })
}

fn integer_fraction_layout(
    raw: &RawSubPattern,
    pattern: &str,
) -> Result<DigitLayout, PatternError> {
    let total_digits = raw
        .integer
        .iter()
        .filter(|c| matches!(c, '0' | '#'))
        .count();
    if total_digits == 0 {
        return Err(PatternError::MissingDigits {
            pattern: pattern.to_string(),
        });
    }

    let mut zeros = 0usize;
    let mut seen = 0usize;
    let mut seen_zero = false;
    // Each comma records its digit distance from the decimal point.
    let mut positions: Vec<usize> = Vec::new();
    for &c in &raw.integer {
        match c {
            '0' => {
                seen_zero = true;
                zeros += 1;
                seen += 1;
            }
            '#' => {
                if seen_zero {
                    return Err(PatternError::DigitsOutOfOrder {
                        pattern: pattern.to_string(),
                    });
                }
                seen += 1;
            }
            ',' => {
                let distance = total_digits - seen;
                if distance > 0 {
                    positions.push(distance);
                }
            }
            _ => unreachable!(),
        }
    }
    positions.sort_unstable();
    positions.dedup();

    // Ascending distances become right-to-left group sizes.
    let mut grouping_sizes = Vec::with_capacity(positions.len());
    let mut previous = 0;
    for position in positions {
        grouping_sizes.push(position - previous);
        previous = position;
    }

    let mut minimum_fraction_digits = 0;
    let mut maximum_fraction_digits = 0;
    let mut round_increment = None;
    if let Some(fraction) = &raw.fraction {
        let mut mandatory = String::new();
        let mut optional = 0usize;
        for &c in fraction {
            match c {
                '#' => optional += 1,
                c if c.is_ascii_digit() => {
                    if optional > 0 {
                        return Err(PatternError::DigitsOutOfOrder {
                            pattern: pattern.to_string(),
                        });
                    }
                    mandatory.push(c);
                }
                _ => unreachable!(),
            }
        }
        minimum_fraction_digits = mandatory.len();
        maximum_fraction_digits = mandatory.len() + optional;
        // A non-zero mandatory run doubles as a rounding increment, so
        // `"0.05"` rounds to steps of five hundredths.
        if mandatory.chars().any(|c| c != '0') {
            round_increment = format!("0.{mandatory}").parse::<f64>().ok();
        }
    }

    Ok(DigitLayout::IntegerFraction {
        minimum_integer_digits: zeros.max(1),
        minimum_fraction_digits,
        maximum_fraction_digits,
        grouping_sizes,
        round_increment,
    })
}
