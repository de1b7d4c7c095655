//! Property tests for the converter and the reactive view model.

use proptest::prelude::*;
use tempconv::app::service::ConverterViewModel;
use tempconv::convert::{convert, parse_celsius};

// ── Blank and non-numeric input ───────────────────────────────

proptest! {
    /// Any mix of whitespace renders as an empty label.
    #[test]
    fn whitespace_only_is_empty(s in "[ \t\r\n\u{0b}\u{0c}]{0,16}") {
        prop_assert_eq!(convert(&s), "");
    }

    /// Letters never parse, whatever digits surround them.
    #[test]
    fn alphabetic_garbage_is_empty(
        prefix in "[0-9]{0,4}",
        letters in "[g-zG-Z]{1,6}",
        suffix in "[0-9]{0,4}",
    ) {
        let s = format!("{prefix}{letters}{suffix}");
        prop_assert_eq!(convert(&s), "");
    }

    /// A lone sign or dot, the states seen mid-typing, stays empty.
    #[test]
    fn partial_tokens_are_empty(s in "[-+.]{1,3}") {
        prop_assert_eq!(convert(&s), "");
    }
}

// ── Finite numbers ────────────────────────────────────────────

proptest! {
    /// Output is exactly `c * 9/5 + 32` with two fraction digits and `°`.
    #[test]
    fn finite_input_matches_formula(c in -1.0e9f64..1.0e9f64) {
        let input = c.to_string();
        let expected = format!("{:.2}°", c * 9.0 / 5.0 + 32.0);
        prop_assert_eq!(convert(&input), expected);
    }

    /// Any finite Celsius value, overflowing result included, gives a
    /// non-empty label.
    #[test]
    fn finite_input_is_never_blank(c in proptest::num::f64::NORMAL) {
        let out = convert(&c.to_string());
        prop_assert!(!out.is_empty(), "blank label for {}", c);
        prop_assert!(out.ends_with('°'));
    }

    /// Integers render with exactly two fraction digits.
    #[test]
    fn integers_have_two_fraction_digits(c in -100_000i64..100_000i64) {
        let out = convert(&c.to_string());
        prop_assert!(out.ends_with('°'));
        let number = out.trim_end_matches('°');
        let (_, frac) = number.split_once('.').expect("decimal point present");
        prop_assert_eq!(frac.len(), 2);
    }

    /// Parsing is independent of surrounding spaces.
    #[test]
    fn padding_does_not_change_value(c in -1.0e6f64..1.0e6f64, pad in 0usize..4) {
        let padded = format!("{}{}{}", " ".repeat(pad), c, " ".repeat(pad));
        prop_assert_eq!(parse_celsius(&padded), Some(c));
    }

    /// Recomputing on unchanged input yields an identical string.
    #[test]
    fn recomputation_is_idempotent(s in "\\PC{0,12}") {
        let mut vm = ConverterViewModel::default();
        vm.set_celsius(s.clone());
        let first = vm.fahrenheit().to_owned();
        vm.set_celsius(s.clone());
        prop_assert_eq!(vm.fahrenheit(), first.as_str());
        prop_assert_eq!(first, convert(&s));
    }

    /// The label is always empty or a number followed by the suffix.
    #[test]
    fn output_shape(s in "[-+.0-9eE ]{0,10}") {
        let out = convert(&s);
        prop_assert!(out.is_empty() || out.ends_with('°'));
    }
}
