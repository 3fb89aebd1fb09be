use kcv::{Document, fixed, general};
use pretty_assertions::assert_eq;

fn dumped<T: kcv::WriteValue>(value: T) -> String {
    let mut doc = Document::new();
    doc.item("f").write(value);
    doc.dump()
}

#[test]
fn default_format() {
    assert_eq!(dumped(0.0), "f: 0\n");
    assert_eq!(dumped(-0.0), "f: -0\n");
    assert_eq!(dumped(-123456.0), "f: -123456\n");
    assert_eq!(dumped(123456.0), "f: 123456\n");
    assert_eq!(dumped(-0.123456), "f: -0.123456\n");
    assert_eq!(dumped(0.123456), "f: 0.123456\n");
}

#[test]
fn default_format_round_trips_with_sign() {
    let mut doc = Document::new();
    doc.item("f").write(-0.0);
    let text = doc.dump();
    let mut reparsed = Document::parse(&text);
    let mut f = 1.0f64;
    reparsed.item("f").read(&mut f);
    assert_eq!(f, 0.0);
    assert!(f.is_sign_negative());
}

#[test]
fn fixed_default_precision_is_six() {
    assert_eq!(dumped(fixed(1.0)), "f: 1.000000\n");
}

#[test]
fn fixed_precision_clamps_to_at_least_one() {
    assert_eq!(dumped(fixed(1.0).precision(-1)), "f: 1.0\n");
    assert_eq!(dumped(fixed(1.0).precision(0)), "f: 1.0\n");
}

#[test]
fn fixed_explicit_precision() {
    assert_eq!(dumped(fixed(1.0).precision(1)), "f: 1.0\n");
    assert_eq!(dumped(fixed(1.0).precision(2)), "f: 1.00\n");
    assert_eq!(dumped(fixed(-0.123456).precision(4)), "f: -0.1235\n");
    assert_eq!(dumped(fixed(0.123456).precision(4)), "f: 0.1235\n");
}

#[test]
fn fixed_excessive_precision_is_clamped() {
    let dump = dumped(fixed(0.123456).precision(1000));
    assert_eq!(&dump[..10], "f: 0.12345");
}

#[test]
fn general_default_precision_is_six() {
    assert_eq!(dumped(general(0.12345678)), "f: 0.123457\n");
}

#[test]
fn general_precision_clamps_to_at_least_one() {
    assert_eq!(dumped(general(1.0).precision(-1)), "f: 1\n");
    assert_eq!(dumped(general(1.0).precision(0)), "f: 1\n");
}

#[test]
fn general_integral_values_have_no_fraction() {
    assert_eq!(dumped(general(-16777216.0f32).precision(8)), "f: -16777216\n");
    assert_eq!(dumped(general(16777216.0f32).precision(8)), "f: 16777216\n");
}

#[test]
fn general_rounds_to_significant_digits() {
    assert_eq!(dumped(general(-0.123456).precision(4)), "f: -0.1235\n");
    assert_eq!(dumped(general(0.123456).precision(4)), "f: 0.1235\n");
}

#[test]
fn general_excessive_precision_is_clamped() {
    let dump = dumped(general(0.123456).precision(1000));
    assert_eq!(&dump[..10], "f: 0.12345");
}

#[test]
fn general_scientific_form_has_no_plus_sign() {
    assert_eq!(dumped(general(2.5e20).precision(3)), "f: 2.5e20\n");
    assert_eq!(dumped(general(1.0e-7).precision(3)), "f: 1e-7\n");
}

#[test]
fn infinity_is_not_written() {
    let mut doc = Document::new();
    let mut f = doc.item("f");
    assert!(f.is_valid());
    f.write(f32::INFINITY);
    assert!(!f.is_valid());
    assert_eq!(doc.dump(), "f:\n");
}

#[test]
fn nan_is_not_written() {
    let mut doc = Document::new();
    let mut f = doc.item("f");
    assert!(f.is_valid());
    f.write(f32::NAN);
    assert!(!f.is_valid());
    assert_eq!(doc.dump(), "f:\n");
}
