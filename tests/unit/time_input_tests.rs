/*!
 * Tests for command line time parsing
 */

use caption_validator::time_input::{format_seconds, parse_time_input};

#[test]
fn test_parseTimeInput_withTvShowLengths_shouldParse() {
    assert_eq!(parse_time_input("45m").unwrap(), 2700.0);
    assert_eq!(parse_time_input("1h").unwrap(), 3600.0);
    assert_eq!(parse_time_input("1h30m").unwrap(), 5400.0);
    assert_eq!(parse_time_input("2h").unwrap(), 7200.0);
}

#[test]
fn test_parseTimeInput_withClockNotation_shouldParse() {
    assert_eq!(parse_time_input("01:30:45").unwrap(), 5445.0);
    assert_eq!(parse_time_input("05:30").unwrap(), 330.0);
}

#[test]
fn test_parseTimeInput_withInvalidValues_shouldFail() {
    assert!(parse_time_input("invalid").is_err());
    assert!(parse_time_input("").is_err());
}

#[test]
fn test_formatSeconds_withParsedValue_shouldRoundTripClock() {
    let seconds = parse_time_input("01:02:03.5").unwrap();
    assert_eq!(format_seconds(seconds), "01:02:03.500");
}
