//! 출력 시간 문자열 파서 테스트.
use print_cost_toolbox::print_time::{
    format_minutes, minutes_from_parts, parse_print_time, PrintTimeError,
};

#[test]
fn parses_hour_minute_text() {
    assert_eq!(parse_print_time("4h30m").unwrap(), 270.0);
    assert_eq!(parse_print_time("4H30M").unwrap(), 270.0);
    assert_eq!(parse_print_time("4h 30m").unwrap(), 270.0);
    assert_eq!(parse_print_time(" 2h ").unwrap(), 120.0);
    assert_eq!(parse_print_time("45m").unwrap(), 45.0);
}

#[test]
fn bare_number_means_minutes() {
    assert_eq!(parse_print_time("270").unwrap(), 270.0);
    assert_eq!(parse_print_time("0").unwrap(), 0.0);
    assert_eq!(parse_print_time(" 90 ").unwrap(), 90.0);
}

#[test]
fn rejects_malformed_text() {
    for bad in ["", "h30m", "4x30m", "4h30", "30m4h", "4h5h", "abc", "4.5h"] {
        let err = parse_print_time(bad);
        assert!(
            matches!(err, Err(PrintTimeError::Malformed(_))),
            "{bad:?} should be rejected, got {err:?}"
        );
    }
}

#[test]
fn error_message_names_the_input() {
    let err = parse_print_time("4x").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("4x"), "message was: {msg}");
}

#[test]
fn structured_parts_match_text_form() {
    assert_eq!(minutes_from_parts(4, 30), 270.0);
    assert_eq!(minutes_from_parts(0, 45), 45.0);
    assert_eq!(minutes_from_parts(2, 0), 120.0);
    assert_eq!(minutes_from_parts(4, 30), parse_print_time("4h30m").unwrap());
}

#[test]
fn formats_minutes_back_to_text() {
    assert_eq!(format_minutes(270.0), "4h 30m");
    assert_eq!(format_minutes(120.0), "2h");
    assert_eq!(format_minutes(45.0), "45m");
    assert_eq!(format_minutes(0.0), "0m");
}
