use xyplot_axes::data::si_value::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-12 * b.abs().max(1.0)
}

#[test]
fn formats_with_largest_fitting_prefix() {
    let p = SiPrefixes::default();
    assert_eq!(format_si(6e9, "Hz", &p, 6), "6GHz");
    assert_eq!(format_si(500e6, "Hz", &p, 6), "500MHz");
    assert_eq!(format_si(10e-9, "s", &p, 6), "10ns");
    assert_eq!(format_si(-120.0, "dB", &p, 6), "-120dB");
    assert_eq!(format_si(0.0, "Ω", &p, 6), "0Ω");
    // rounding up carries into the next prefix
    assert_eq!(format_si(999_999.9, "Hz", &p, 6), "1MHz");
    assert_eq!(format_si(999.99999, "Hz", &p, 6), "1kHz");
    assert_eq!(format_si(0.99999999, "s", &p, 6), "1s");
    assert_eq!(format_si(-999_999.9, "Hz", &p, 6), "-1MHz");
    assert_eq!(format_si(999_999.9, "Hz", &p, 7), "999.9999kHz");
}

#[test]
fn rounding_carry_stays_on_largest_prefix() {
    let p = SiPrefixes::default();
    assert_eq!(format_si(999_999.9e9, "Hz", &p, 6), "1000GHz");
}

#[test]
fn huge_precision_is_clamped() {
    let p = SiPrefixes::default();
    assert_eq!(format_si(1.5e3, "Hz", &p, usize::MAX), "1.5kHz");
    assert_eq!(format_si(2.0, "", &p, 0), "2");
}

#[test]
fn format_limits_significant_digits() {
    let p = SiPrefixes::default();
    assert_eq!(format_si(1.23456789e3, "Hz", &p, 4), "1.235kHz");
    assert_eq!(format_si(2.5e-3, "", &p, 6), "2.5m");
}

#[test]
fn format_without_plain_prefix_uses_smaller_one() {
    let p = SiPrefixes::parse("mk").unwrap();
    assert_eq!(format_si(3.0, "V", &p, 6), "3000mV");
}

#[test]
fn parses_prefix_and_unit() {
    let p = SiPrefixes::default();
    assert!(close(parse_si("1.5GHz", "Hz", &p).unwrap(), 1.5e9));
    assert!(close(parse_si(" 1.5 G Hz ", "Hz", &p).unwrap(), 1.5e9));
    assert!(close(parse_si("10n", "s", &p).unwrap(), 10e-9));
    assert!(close(parse_si("-20", "dB", &p).unwrap(), -20.0));
    assert!(close(parse_si("2e3", "", &p).unwrap(), 2000.0));
    assert!(close(parse_si("3µ", "F", &p).unwrap(), 3e-6));
}

#[test]
fn unit_letter_is_not_mistaken_for_prefix() {
    let p = SiPrefixes::default();
    assert!(close(parse_si("5m", "m", &p).unwrap(), 5.0));
    assert!(close(parse_si("5mm", "m", &p).unwrap(), 5e-3));
}

#[test]
fn parse_errors() {
    let p = SiPrefixes::default();
    assert_eq!(parse_si("   ", "Hz", &p), Err(SiValueError::Empty));
    assert_eq!(
        parse_si("abc", "Hz", &p),
        Err(SiValueError::InvalidNumber("abc".to_string()))
    );
    assert_eq!(parse_si("1T", "Hz", &p), Err(SiValueError::PrefixNotAllowed('T')));
    assert!(matches!(parse_si("k", "", &p), Err(SiValueError::InvalidNumber(_))));
}

#[test]
fn prefix_configuration_errors() {
    assert_eq!(SiPrefixes::parse("pnx"), Err(SiValueError::UnknownPrefix('x')));
    let p = SiPrefixes::parse("µ ").unwrap();
    assert!(p.allows('u'));
    assert!(p.allows('µ'));
    assert!(!p.allows('k'));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(SiValueError::Empty.to_string(), "no value entered");
    assert_eq!(
        SiValueError::PrefixNotAllowed('T').to_string(),
        "prefix 'T' is not allowed here"
    );
}
