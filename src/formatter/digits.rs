//! Digit string generation
//!
//! Turns an already scaled value into an ASCII digit string under either
//! digit regime. Rounding happens on the signed value so that ceil/floor
//! keep their absolute direction; the returned text is unsigned, the sign
//! travels through the sub-pattern affixes.

use crate::round::{round, round_to_increment};
use crate::types::RoundingMode;

/// Format `value` to between `minimum` and `maximum` significant digits
pub(crate) fn significant_digits(
    value: f64,
    minimum: usize,
    maximum: usize,
    mode: RoundingMode,
) -> String {
    let magnitude = value.abs();
    let integer_digits = if magnitude == 0.0 {
        1
    } else {
        decimal_exponent(magnitude) + 1
    };
    let rounded = round(mode, value, integer_digits - maximum as i32).abs();

    let mut text = rounded.to_string();
    let significant = count_significant(&text);
    if significant < minimum {
        if !text.contains('.') {
            text.push('.');
        }
        for _ in significant..minimum {
            text.push('0');
        }
    }
    text
}

/// Format `value` under fixed integer/fraction digit counts
pub(crate) fn integer_fraction_digits(
    value: f64,
    minimum_integer_digits: usize,
    minimum_fraction_digits: usize,
    maximum_fraction_digits: usize,
    mode: RoundingMode,
    round_increment: Option<f64>,
) -> String {
    let rounded = match round_increment {
        Some(increment) => round_to_increment(mode, value, increment),
        None => round(mode, value, -(maximum_fraction_digits as i32)),
    };
    let magnitude = rounded.abs();

    let text = magnitude.to_string();
    let (integer, fraction) = match text.split_once('.') {
        Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
        None => (text, String::new()),
    };

    // The integer part is only ever padded, never truncated.
    let mut integer = integer;
    if integer.len() < minimum_integer_digits {
        integer = format!(
            "{}{integer}",
            "0".repeat(minimum_integer_digits - integer.len())
        );
    }
    let mut fraction = fraction;
    while fraction.len() < minimum_fraction_digits {
        fraction.push('0');
    }

    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Insert `separator` into an integer digit string
///
/// `sizes` lists group sizes right-to-left from the decimal point; once the
/// explicit sizes run out the last one repeats for every further group.
/// Operates on characters, so already-localized digit glyphs group
/// correctly.
pub(crate) fn insert_grouping(integer: &str, sizes: &[usize], separator: &str) -> String {
    let Some(&repeat) = sizes.last() else {
        return integer.to_string();
    };
    let glyphs: Vec<char> = integer.chars().collect();
    let mut cuts = Vec::new();
    let mut position = 0;
    let mut index = 0;
    loop {
        let size = sizes.get(index).copied().unwrap_or(repeat);
        if size == 0 {
            break;
        }
        position += size;
        if position >= glyphs.len() {
            break;
        }
        cuts.push(glyphs.len() - position);
        index += 1;
    }

    let mut out = String::with_capacity(integer.len() + cuts.len() * separator.len());
    let mut previous = 0;
    for &cut in cuts.iter().rev() {
        out.extend(glyphs[previous..cut].iter());
        out.push_str(separator);
        previous = cut;
    }
    out.extend(glyphs[previous..].iter());
    out
}

// Decimal exponent of the printed representation: 3 for 1000, -3 for 0.001.
fn decimal_exponent(magnitude: f64) -> i32 {
    let repr = format!("{magnitude:e}");
    repr.split_once('e')
        .and_then(|(_, exponent)| exponent.parse().ok())
        .unwrap_or(0)
}

// Digits carrying information: leading zeros never count, a bare zero still
// occupies one position.
fn count_significant(text: &str) -> usize {
    let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).collect();
    let leading_zeros = digits.iter().take_while(|c| **c == '0').count();
    (digits.len() - leading_zeros).max(1)
}
