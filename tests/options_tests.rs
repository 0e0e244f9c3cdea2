use number_pattern::locale::get_locale_symbols;
use number_pattern::types::{DigitLayout, FormatOptions, LocaleSymbols, RoundingMode};
use number_pattern::{CompileError, NumberFormatter, NumberParser, ValidationError};

fn build(pattern: &str, options: FormatOptions) -> Result<NumberFormatter, CompileError> {
    NumberFormatter::from_pattern(pattern, &LocaleSymbols::default(), &options)
}

#[test]
fn rejects_a_lone_significant_bound() {
    let result = build(
        "0.##",
        FormatOptions {
            minimum_significant_digits: Some(2),
            ..Default::default()
        },
    );
    assert_eq!(
        result.err(),
        Some(CompileError::Validation(
            ValidationError::LoneSignificantBound
        ))
    );
}

#[test]
fn rejects_out_of_range_bounds() {
    assert!(matches!(
        build(
            "0",
            FormatOptions {
                minimum_integer_digits: Some(0),
                ..Default::default()
            },
        ),
        Err(CompileError::Validation(ValidationError::OutOfRange {
            name: "minimumIntegerDigits",
            ..
        }))
    ));
    assert!(matches!(
        build(
            "0",
            FormatOptions {
                maximum_fraction_digits: Some(21),
                ..Default::default()
            },
        ),
        Err(CompileError::Validation(ValidationError::OutOfRange {
            name: "maximumFractionDigits",
            ..
        }))
    ));
    assert!(matches!(
        build(
            "@",
            FormatOptions {
                minimum_significant_digits: Some(5),
                maximum_significant_digits: Some(2),
                ..Default::default()
            },
        ),
        Err(CompileError::Validation(ValidationError::OutOfRange {
            name: "maximumSignificantDigits",
            ..
        }))
    ));
}

#[test]
fn rejects_malformed_patterns() {
    assert!(matches!(
        build("abc", FormatOptions::default()),
        Err(CompileError::Pattern(_))
    ));
    assert!(matches!(
        build("0;0;0", FormatOptions::default()),
        Err(CompileError::Pattern(_))
    ));
}

#[test]
fn significant_options_switch_an_integer_pattern() {
    let formatter = build(
        "0.##",
        FormatOptions {
            minimum_significant_digits: Some(2),
            maximum_significant_digits: Some(3),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        formatter.properties().layout,
        DigitLayout::Significant {
            minimum_significant_digits: 2,
            maximum_significant_digits: 3,
        }
    );
    assert_eq!(formatter.format(12345.0), "12300");
}

#[test]
fn significant_options_refine_a_significant_pattern() {
    // The pattern already carries both bounds, so one override is fine.
    let formatter = build(
        "@@#",
        FormatOptions {
            maximum_significant_digits: Some(5),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(
        formatter.properties().layout,
        DigitLayout::Significant {
            minimum_significant_digits: 2,
            maximum_significant_digits: 5,
        }
    );
}

#[test]
fn construction_is_deterministic_and_idempotent() {
    let options = FormatOptions {
        minimum_fraction_digits: Some(1),
        maximum_fraction_digits: Some(4),
        round: Some(RoundingMode::Ceil),
        use_grouping: Some(true),
        ..Default::default()
    };
    let first = build("#,##0.##", options.clone()).unwrap();
    let second = build("#,##0.##", options).unwrap();
    assert_eq!(first.properties(), second.properties());
}

#[test]
fn formatter_and_parser_resolve_identically() {
    let symbols = get_locale_symbols("en").unwrap();
    let options = FormatOptions {
        maximum_fraction_digits: Some(4),
        ..Default::default()
    };
    let formatter = NumberFormatter::from_pattern("#,##0.##", &symbols, &options).unwrap();
    let parser = NumberParser::from_pattern("#,##0.##", &symbols, &options).unwrap();
    assert_eq!(formatter.properties(), parser.properties());
}

#[test]
fn formatters_are_shareable_across_threads() {
    let formatter = build("#,##0.##", FormatOptions::default()).unwrap();
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let formatter = formatter.clone();
            std::thread::spawn(move || formatter.format(12735.25 + i as f64))
        })
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap().contains(','));
    }
}
