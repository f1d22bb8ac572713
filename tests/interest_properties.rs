//! Cross-module behaviour: raw text in, calculated result out

use approx::assert_relative_eq;
use interest_calculator::{
    calculate, compare_with_simple, compound_interest, simple_interest, validate,
    CalculationMode, RawInput, Summary, ValidationErrorKind,
};

const PRINCIPALS: [f64; 4] = [1.0, 2_500.0, 1_000_000.0, 999_999_999_999.0];
const RATES: [f64; 4] = [0.01, 5.0, 37.5, 100.0];
const TERMS: [f64; 4] = [0.25, 1.0, 7.5, 100.0];
const FREQUENCIES: [u32; 5] = [1, 2, 4, 12, 365];

#[test]
fn test_simple_matches_formula() {
    for &p in &PRINCIPALS {
        for &r in &RATES {
            for &t in &TERMS {
                let result = simple_interest(p, r, t);
                assert_relative_eq!(result.total(), p + p * (r / 100.0) * t, max_relative = 1e-12);
                assert_eq!(result.total(), result.principal() + result.interest());
            }
        }
    }
}

#[test]
fn test_compound_matches_formula() {
    for &p in &PRINCIPALS {
        for &r in &RATES {
            for &n in &FREQUENCIES {
                let t = 7.5;
                let result = compound_interest(p, r, t, n);
                let n = n as f64;
                let expected = p * (1.0 + (r / 100.0) / n).powf(n * t);
                assert_relative_eq!(result.total(), expected, max_relative = 1e-12);
                assert_eq!(result.interest(), result.total() - result.principal());
            }
        }
    }
}

#[test]
fn test_longer_terms_grow_totals() {
    for &r in &RATES {
        let mut previous_simple = 0.0;
        let mut previous_compound = 0.0;
        for &t in &TERMS {
            let simple = simple_interest(10_000.0, r, t).total();
            let compound = compound_interest(10_000.0, r, t, 12).total();
            assert!(simple > previous_simple, "simple total not increasing at rate {} term {}", r, t);
            assert!(compound > previous_compound, "compound total not increasing at rate {} term {}", r, t);
            previous_simple = simple;
            previous_compound = compound;
        }
    }
}

#[test]
fn test_compounding_never_loses_to_simple() {
    for &r in &RATES {
        for &t in &TERMS {
            for &n in &FREQUENCIES {
                let simple = simple_interest(50_000.0, r, t).total();
                let compound = compound_interest(50_000.0, r, t, n).total();
                // Terms under one year compound below simple interest, so only
                // whole-year terms and longer are held to dominance
                if t >= 1.0 {
                    assert!(
                        compound >= simple * (1.0 - 1e-12),
                        "compound {} < simple {} at rate {} term {} frequency {}",
                        compound, simple, r, t, n
                    );
                }
            }
        }
    }
}

#[test]
fn test_boundary_inputs() {
    let cases = [
        ("0", "5", "2", Some(ValidationErrorKind::NonPositive)),
        ("999999999999", "5", "2", None),
        ("1000000000000", "5", "2", Some(ValidationErrorKind::OutOfRange)),
        ("1000", "100", "2", None),
        ("1000", "100.0001", "2", Some(ValidationErrorKind::OutOfRange)),
        ("", "5", "2", Some(ValidationErrorKind::MissingField)),
        ("abc", "5", "2", Some(ValidationErrorKind::NotANumber)),
    ];

    for (principal, rate, time, expected) in cases {
        let outcome = validate(&RawInput::new(principal, rate, time)).err().map(|e| e.kind());
        assert_eq!(outcome, expected, "input ({:?}, {:?}, {:?})", principal, rate, time);
    }
}

#[test]
fn test_simple_end_to_end() {
    let input = validate(&RawInput::new("1000000", "5", "2")).unwrap();
    let result = calculate(CalculationMode::Simple, &input);

    assert_relative_eq!(result.interest(), 100_000.0, epsilon = 1e-6);
    assert_relative_eq!(result.total(), 1_100_000.0, epsilon = 1e-6);
    assert_eq!(Summary::from_result(&result).total, "Rp 1.100.000");
}

#[test]
fn test_compound_end_to_end() {
    let input = validate(&RawInput::new("1000000", "5", "2").with_frequency("12")).unwrap();
    let result = calculate(CalculationMode::Compound, &input);

    assert!((result.total() - 1_104_941.34).abs() < 0.01);
    assert!((result.interest() - 104_941.34).abs() < 0.01);

    let comparison = compare_with_simple(&result).unwrap();
    assert_relative_eq!(comparison.simple_total, 1_100_000.0, epsilon = 1e-6);
    assert!(comparison.difference > 0.0);
}
