// File: crates/series-core/tests/record.rs
// Purpose: Field-level parsing: numeric prefixes, two-digit years, blank vs malformed lines.

use chrono::NaiveDate;
use series_core::record::{parse_date, parse_value, read_records};
use series_core::Schema;

#[test]
fn parse_value_reads_leading_float() {
    assert_eq!(parse_value("58.13"), 58.13);
    assert_eq!(parse_value(" 58.13abc"), 58.13);
    assert_eq!(parse_value("-1.5e2kg"), -150.0);
    assert_eq!(parse_value("+.5"), 0.5);
    assert_eq!(parse_value("7."), 7.0);
    assert_eq!(parse_value("3e"), 3.0);
    assert_eq!(parse_value("12,5"), 12.0);
    assert_eq!(parse_value("Infinity"), f64::INFINITY);
    assert_eq!(parse_value("-Infinity!"), f64::NEG_INFINITY);
    for bad in ["", "abc", ".", "-", "+.e3", "inf", "NaN", "e5"] {
        assert!(parse_value(bad).is_nan(), "{bad:?}");
    }
}

#[test]
fn parse_date_pivots_two_digit_years() {
    let f = "%d-%b-%y";
    assert_eq!(parse_date("01-May-20", f), NaiveDate::from_ymd_opt(2020, 5, 1));
    assert_eq!(parse_date("01-May-68", f), NaiveDate::from_ymd_opt(2068, 5, 1));
    assert_eq!(parse_date("01-May-69", f), NaiveDate::from_ymd_opt(1969, 5, 1));
    assert_eq!(parse_date("01-May-70", f), NaiveDate::from_ymd_opt(1970, 5, 1));
    // four-digit patterns are left alone
    assert_eq!(parse_date("2069-05-01", "%Y-%m-%d"), NaiveDate::from_ymd_opt(2069, 5, 1));
    assert_eq!(parse_date("not-a-date", f), None);
    assert_eq!(parse_date("01-May-20x", f), None);
}

#[test]
fn only_blank_lines_are_skipped() {
    let recs = read_records("a,1\n\n   \n,\n;\n", &Schema::default()).unwrap();
    let dates: Vec<_> = recs.iter().map(|r| r.date.as_str()).collect();
    assert_eq!(dates, ["a", "", ";"]);
    assert_eq!(recs[1].fields, [""]);
    assert!(recs[2].fields.is_empty());
}
