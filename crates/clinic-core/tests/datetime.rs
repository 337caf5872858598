//! Tests for heterogeneous date parsing.

use clinic_core::datetime::{parse_day, parse_day_value, parse_timestamp_ms};
use clinic_model::DayKey;
use serde_json::json;

#[test]
fn iso_date_parses() {
    assert_eq!(parse_day("2025-03-05"), DayKey::from_ymd(2025, 3, 5));
    assert_eq!(parse_day(" 2025-03-05 "), DayKey::from_ymd(2025, 3, 5));
}

#[test]
fn day_first_date_parses() {
    assert_eq!(parse_day("05-03-2025"), DayKey::from_ymd(2025, 3, 5));
    assert_eq!(parse_day("05/03/2025"), DayKey::from_ymd(2025, 3, 5));
    assert_eq!(parse_day("31-12-2024"), DayKey::from_ymd(2024, 12, 31));
}

#[test]
fn iso_datetime_parses_to_its_day() {
    assert_eq!(
        parse_day("2025-03-05T08:30:00Z"),
        DayKey::from_ymd(2025, 3, 5)
    );
    assert_eq!(
        parse_day("2025-03-05T08:30:00+05:30"),
        DayKey::from_ymd(2025, 3, 5)
    );
    assert_eq!(
        parse_day("2025-03-05T08:30:00"),
        DayKey::from_ymd(2025, 3, 5)
    );
    assert_eq!(
        parse_day("2025-03-05T08:30:00.123"),
        DayKey::from_ymd(2025, 3, 5)
    );
    assert_eq!(parse_day("2025-03-05T08:30"), DayKey::from_ymd(2025, 3, 5));
}

#[test]
fn epoch_inputs_parse() {
    // 2025-03-05T00:00:00Z in seconds and milliseconds.
    assert_eq!(parse_day("1741132800"), DayKey::from_ymd(2025, 3, 5));
    assert_eq!(parse_day("1741132800000"), DayKey::from_ymd(2025, 3, 5));
    assert_eq!(
        parse_day_value(Some(&json!(1741132800000i64))),
        DayKey::from_ymd(2025, 3, 5)
    );
}

#[test]
fn unparseable_dates_are_invalid_not_today() {
    for raw in ["", "   ", "yesterday", "2025-13-01", "32-01-2025", "05.03.2025"] {
        assert_eq!(parse_day(raw), DayKey::Invalid, "{raw:?}");
    }
    assert_eq!(parse_day_value(None), DayKey::Invalid);
    assert_eq!(parse_day_value(Some(&json!(null))), DayKey::Invalid);
    assert_eq!(parse_day_value(Some(&json!(true))), DayKey::Invalid);
}

#[test]
fn calendar_impossible_dates_are_invalid() {
    assert_eq!(parse_day("2025-02-29"), DayKey::Invalid);
    assert_eq!(parse_day("2024-02-29"), DayKey::from_ymd(2024, 2, 29));
    assert_eq!(parse_day("31-04-2025"), DayKey::Invalid);
}

#[test]
fn produced_day_keys_round_trip() {
    let day = DayKey::from_ymd(2025, 3, 5);
    assert_eq!(parse_day(&day.to_string()), day);
}

#[test]
fn created_at_parses_numbers_and_strings() {
    assert_eq!(parse_timestamp_ms(Some(&json!(1741132800000i64))), 1_741_132_800_000);
    // Seconds scale up to milliseconds.
    assert_eq!(parse_timestamp_ms(Some(&json!(1741132800))), 1_741_132_800_000);
    assert_eq!(
        parse_timestamp_ms(Some(&json!("2025-03-05T00:00:00Z"))),
        1_741_132_800_000
    );
    assert_eq!(
        parse_timestamp_ms(Some(&json!("2025-03-05"))),
        1_741_132_800_000
    );
}

#[test]
fn missing_created_at_sorts_before_everything() {
    assert_eq!(parse_timestamp_ms(None), 0);
    assert_eq!(parse_timestamp_ms(Some(&json!(null))), 0);
    assert_eq!(parse_timestamp_ms(Some(&json!("not a time"))), 0);
    assert_eq!(parse_timestamp_ms(Some(&json!(-5))), 0);
}
