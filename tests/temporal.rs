use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use sundry::temporal::*;
use sundry::SundryError;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn moment(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, s).expect("valid time")
}

#[test]
fn format_dates() {
    let christmas = Some(date(2023, 12, 25));
    assert_eq!(format_date(christmas, Some("yyyy-MM-dd")).as_deref(), Some("2023-12-25"));
    assert_eq!(format_date(christmas, Some("dd/MM/yyyy")).as_deref(), Some("25/12/2023"));
    assert_eq!(format_date(christmas, Some("MMM dd, yyyy")).as_deref(), Some("Dec 25, 2023"));
    assert_eq!(format_date(Some(date(812, 1, 2)), Some("yyyy.MM.dd")).as_deref(), Some("0812.01.02"));
    assert_eq!(format_date(None, Some("yyyy-MM-dd")), None);
    assert_eq!(format_date(christmas, None), None);
}

#[test]
fn format_date_times() {
    let m = Some(moment(2023, 12, 25, 14, 30, 45));
    assert_eq!(format_date_time(m, Some("yyyy-MM-dd HH:mm:ss")).as_deref(), Some("2023-12-25 14:30:45"));
    assert_eq!(format_date_time(m, Some("dd/MM/yyyy HH:mm")).as_deref(), Some("25/12/2023 14:30"));
    assert_eq!(format_date_time(m, Some(ISO_DATE_TIME)).as_deref(), Some("2023-12-25T14:30:45"));
    assert_eq!(format_date_time(m, Some("'at' HH'h'")).as_deref(), Some("at 14h"));
    assert_eq!(format_date_time(None, Some("yyyy")), None);
    assert_eq!(format_date_time(m, None), None);
}

#[test]
fn parse_dates() {
    let expected = Some(date(2023, 12, 25));
    assert_eq!(parse_date(Some("2023-12-25"), Some("yyyy-MM-dd")), Ok(expected));
    assert_eq!(parse_date(Some("25/12/2023"), Some("dd/MM/yyyy")), Ok(expected));
    assert_eq!(parse_date(Some("Dec 25, 2023"), Some("MMM dd, yyyy")), Ok(expected));
    assert_eq!(parse_date(Some("2023-12-25 14:30:45"), Some("yyyy-MM-dd HH:mm:ss")), Ok(expected));
}

#[test]
fn parse_absent_or_blank_gives_nothing() {
    assert_eq!(parse_date(None, Some("yyyy-MM-dd")), Ok(None));
    assert_eq!(parse_date(Some(""), Some("yyyy-MM-dd")), Ok(None));
    assert_eq!(parse_date(Some("   "), Some("yyyy-MM-dd")), Ok(None));
    assert_eq!(parse_date(Some("2023-12-25"), None), Ok(None));
    assert_eq!(parse_date(Some("2023-12-25"), Some(" ")), Ok(None));
    assert_eq!(parse_date_time(None, Some("yyyy-MM-dd HH:mm:ss")), Ok(None));
    assert_eq!(parse_date_time(Some(""), Some("yyyy-MM-dd HH:mm:ss")), Ok(None));
    assert_eq!(parse_date_time(Some("2023-12-25 14:30:45"), None), Ok(None));
}

#[test]
fn parse_mismatch_fails() {
    for (text, pattern) in [
        ("2023/12/25", "yyyy-MM-dd"),
        ("2023-1-25", "yyyy-MM-dd"),
        ("2023-12-25x", "yyyy-MM-dd"),
        ("2023-02-30", "yyyy-MM-dd"),
        ("2023-13-01", "yyyy-MM-dd"),
        ("Foo 25, 2023", "MMM dd, yyyy"),
        ("2023-12", "yyyy-MM"),
        ("not a date", "yyyy-MM-dd"),
    ] {
        let result = parse_date(Some(text), Some(pattern));
        assert!(
            matches!(result, Err(SundryError::Parse { .. })),
            "'{text}' with '{pattern}' should not parse: {result:?}"
        );
    }
    let err = parse_date(Some("2023-12-25x"), Some("yyyy-MM-dd")).unwrap_err();
    assert_eq!(err, SundryError::Parse { message: "unparsed text remains".into(), position: Some(10) });
}

#[test]
fn parse_date_times() {
    assert_eq!(
        parse_date_time(Some("2023-12-25 14:30:45"), Some("yyyy-MM-dd HH:mm:ss")),
        Ok(Some(moment(2023, 12, 25, 14, 30, 45)))
    );
    assert_eq!(
        parse_date_time(Some("2023-12-25T14:30:45"), Some(ISO_DATE_TIME)),
        Ok(Some(moment(2023, 12, 25, 14, 30, 45)))
    );
    // minutes and seconds default to zero
    assert_eq!(
        parse_date_time(Some("25/12/2023 14"), Some("dd/MM/yyyy HH")),
        Ok(Some(moment(2023, 12, 25, 14, 0, 0)))
    );
    assert!(matches!(
        parse_date_time(Some("2023-12-25"), Some("yyyy-MM-dd")),
        Err(SundryError::Parse { .. })
    ));
    assert!(matches!(
        parse_date_time(Some("2023-12-25 24:00:00"), Some("yyyy-MM-dd HH:mm:ss")),
        Err(SundryError::Parse { .. })
    ));
}

#[test]
fn days_between_dates() {
    let start = Some(date(2023, 1, 1));
    let end = Some(date(2023, 1, 10));
    assert_eq!(days_between(start, end), 9);
    assert_eq!(days_between(end, start), -9);
    assert_eq!(days_between(start, start), 0);
    assert_eq!(days_between(None, end), 0);
    assert_eq!(days_between(start, None), 0);
    assert_eq!(days_between(Some(date(2024, 1, 1)), Some(date(2025, 1, 1))), 366);
}

#[test]
fn hours_between_moments() {
    let start = Some(moment(2023, 1, 1, 10, 0, 0));
    let end = Some(moment(2023, 1, 1, 15, 0, 0));
    assert_eq!(hours_between(start, end), 5);
    assert_eq!(hours_between(end, start), -5);
    assert_eq!(hours_between(start, start), 0);
    assert_eq!(hours_between(None, end), 0);
    assert_eq!(hours_between(start, None), 0);
    // partial hours are cut toward zero
    let almost = Some(moment(2023, 1, 1, 12, 59, 59));
    assert_eq!(hours_between(start, almost), 2);
    assert_eq!(hours_between(almost, start), -2);
}

#[test]
fn relative_to_today() {
    let today = today();
    let yesterday = Some(today - TimeDelta::days(1));
    let tomorrow = Some(today + TimeDelta::days(1));

    assert!(is_in_past(yesterday));
    assert!(!is_in_past(tomorrow));
    assert!(!is_in_past(Some(today)));
    assert!(!is_in_past(None));

    assert!(!is_in_future(yesterday));
    assert!(is_in_future(tomorrow));
    assert!(!is_in_future(Some(today)));
    assert!(!is_in_future(None));

    assert!(!is_today(yesterday));
    assert!(!is_today(tomorrow));
    assert!(is_today(Some(today)));
    assert!(!is_today(None));
}

#[test]
fn iso_profiles() {
    let d = current_date_iso();
    assert_eq!(d.len(), 10);
    assert!(NaiveDate::parse_from_str(&d, "%Y-%m-%d").is_ok(), "{d}");
    let dt = current_date_time_iso();
    assert_eq!(dt.len(), 19);
    assert_eq!(&dt[10..11], "T");
    assert!(NaiveDateTime::parse_from_str(&dt, "%Y-%m-%dT%H:%M:%S").is_ok(), "{dt}");
}

#[test]
fn shifting_days() {
    let base = Some(date(2023, 1, 1));
    assert_eq!(add_days(base, 10), Ok(Some(date(2023, 1, 11))));
    assert_eq!(add_days(base, 0), Ok(base));
    assert_eq!(add_days(None, 10), Ok(None));
    assert_eq!(subtract_days(Some(date(2023, 1, 11)), 10), Ok(base));
    assert_eq!(subtract_days(None, 10), Ok(None));
    assert_eq!(subtract_days(None, i64::MIN), Ok(None));
    // across year ends and leap days
    assert_eq!(add_days(Some(date(2023, 12, 31)), 1), Ok(Some(date(2024, 1, 1))));
    assert_eq!(add_days(Some(date(2024, 2, 28)), 1), Ok(Some(date(2024, 2, 29))));
    assert_eq!(add_days(Some(date(2023, 2, 28)), 1), Ok(Some(date(2023, 3, 1))));
    assert_eq!(subtract_days(Some(date(2024, 3, 1)), 1), Ok(Some(date(2024, 2, 29))));
    assert_eq!(add_days(base, -1), Ok(Some(date(2022, 12, 31))));
}

#[test]
fn shifting_out_of_range_fails() {
    assert!(matches!(add_days(Some(NaiveDate::MAX), 1), Err(SundryError::InvalidArgument(_))));
    assert!(matches!(add_days(Some(date(2023, 1, 1)), i64::MAX), Err(SundryError::InvalidArgument(_))));
    assert!(matches!(subtract_days(Some(date(2023, 1, 1)), i64::MIN), Err(SundryError::InvalidArgument(_))));
}
