use super::*;

// =============================================================
// Parsing
// =============================================================

#[test]
fn parse_percent_suffix() {
    let value = DisplayValue::parse("40%");
    assert_eq!(value.target(), 40);
    assert_eq!(value.prefix(), "");
    assert_eq!(value.suffix(), "%");
    assert!(value.is_numeric());
}

#[test]
fn parse_bare_number_has_empty_decoration() {
    let value = DisplayValue::parse("532");
    assert_eq!(value.target(), 532);
    assert_eq!(value.suffix(), "");
}

#[test]
fn parse_plus_suffix() {
    let value = DisplayValue::parse("15+");
    assert_eq!(value.target(), 15);
    assert_eq!(value.suffix(), "+");
}

#[test]
fn parse_keeps_leading_decoration() {
    let value = DisplayValue::parse("$100K");
    assert_eq!(value.prefix(), "$");
    assert_eq!(value.target(), 100);
    assert_eq!(value.suffix(), "K");
}

#[test]
fn parse_uses_first_digit_run_only() {
    let value = DisplayValue::parse("8M+ of 10M");
    assert_eq!(value.target(), 8);
    assert_eq!(value.suffix(), "M+ of 10M");
}

#[test]
fn parse_without_digits_is_literal() {
    let value = DisplayValue::parse("many");
    assert!(!value.is_numeric());
    assert_eq!(value.target(), 0);
    assert_eq!(value.initial(), "many");
    assert_eq!(value.complete(), "many");
}

#[test]
fn parse_overflow_is_literal() {
    let text = "99999999999999999999999%";
    let value = DisplayValue::parse(text);
    assert!(!value.is_numeric());
    assert_eq!(value.render(3), text);
}

#[test]
fn from_str_reports_missing_digits() {
    let err = "n/a".parse::<DisplayValue>().unwrap_err();
    assert_eq!(err, DisplayError::NoDigits("n/a".to_owned()));
    assert!(err.to_string().contains("no digits"));
}

#[test]
fn from_str_reports_overflow() {
    let err = "184467440737095516160".parse::<DisplayValue>().unwrap_err();
    assert!(matches!(err, DisplayError::Overflow(_)));
}

// =============================================================
// Rendering
// =============================================================

#[test]
fn render_reattaches_suffix_to_every_frame() {
    let value = DisplayValue::parse("40%");
    assert_eq!(value.initial(), "0%");
    assert_eq!(value.render(1), "1%");
    assert_eq!(value.render(39), "39%");
}

#[test]
fn final_frame_reproduces_original_text() {
    for text in ["40%", "532", "2", "15+", "0", "$100K", "~ 12 apps"] {
        let value = DisplayValue::parse(text);
        assert_eq!(value.complete(), text, "final frame for {text:?}");
        assert_eq!(value.to_string(), text);
    }
}

#[test]
fn zero_target_initial_equals_final() {
    let value = DisplayValue::parse("0%");
    assert_eq!(value.target(), 0);
    assert_eq!(value.initial(), value.complete());
}

// =============================================================
// Approximation
// =============================================================

#[test]
fn approximation_marks_sentinel_value() {
    let approx = Approximation::new(60);
    assert_eq!(approx.decorate(60, "60%".to_owned()), "~60%");
}

#[test]
fn approximation_ignores_other_values() {
    let approx = Approximation::new(60);
    assert_eq!(approx.decorate(59, "59%".to_owned()), "59%");
}

#[test]
fn approximation_custom_marker() {
    let approx = Approximation::new(3).with_marker("≈");
    assert_eq!(approx.decorate(3, "3".to_owned()), "≈3");
}
