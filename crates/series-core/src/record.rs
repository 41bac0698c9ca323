// File: crates/series-core/src/record.rs
// Summary: Record parser; splits text into raw records and parses date/number fields.

use chrono::{Datelike, NaiveDate};

use crate::error::Result;
use crate::schema::Schema;

/// One raw line: the date text plus the value fields in column order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    pub date: String,
    pub fields: Vec<String>,
}

/// Split `text` into records using the schema's delimiter.
///
/// Lines are split verbatim: quotes are ordinary characters, fields are trimmed,
/// and blank lines yield no record. Short lines keep fewer fields; the point
/// parser turns the missing ones into `NaN`.
pub fn read_records(text: &str, schema: &Schema) -> Result<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .delimiter(schema.delimiter())
        .from_reader(text.as_bytes());

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        // a blank line; lines of bare delimiters are kept as malformed rows
        if rec.len() == 1 && rec[0].is_empty() {
            continue;
        }
        let line = rec.position().map(|p| p.line()).unwrap_or_default();
        if rec.len() != schema.width() {
            log::debug!("line {line}: expected {} fields, found {}", schema.width(), rec.len());
        }
        let mut fields = rec.iter().map(str::to_string);
        let date = fields.next().unwrap_or_default();
        out.push(Record { date, fields: fields.collect() });
    }
    Ok(out)
}

/// Two-digit years above this belong to the 1900s.
pub const TWO_DIGIT_YEAR_PIVOT: i32 = 68;

/// Parse a date against a chrono pattern; any mismatch yields `None`.
/// With `%y`, `00..=68` map to 20xx and `69..=99` to 19xx.
pub fn parse_date(text: &str, format: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(text.trim(), format).ok()?;
    if !format.contains("%y") {
        return Some(date);
    }
    let year = date.year();
    if year >= 2000 && year.rem_euclid(100) > TWO_DIGIT_YEAR_PIVOT {
        date.with_year(year - 100)
    } else {
        Some(date)
    }
}

/// Parse the longest leading float in a field (`58.13abc` reads as 58.13).
/// Text with no numeric prefix yields `NaN`.
pub fn parse_value(text: &str) -> f64 {
    let s = text.trim_start();
    let unsigned = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if unsigned.starts_with("Infinity") {
        return if s.starts_with('-') { f64::NEG_INFINITY } else { f64::INFINITY };
    }
    let end = float_prefix_len(s);
    if end == 0 {
        return f64::NAN;
    }
    s[..end].parse::<f64>().unwrap_or(f64::NAN)
}

// Byte length of `[+-]? digits? (. digits?)? ([eE] [+-]? digits)?` with at least one mantissa digit.
fn float_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() { i += 1; }
        i
    };
    let mut i = usize::from(matches!(b.first().copied(), Some(b'+' | b'-')));
    let int_end = digits(i);
    let mut mantissa = int_end > i;
    i = int_end;
    if b.get(i) == Some(&b'.') {
        let frac_end = digits(i + 1);
        if frac_end > i + 1 || mantissa {
            mantissa |= frac_end > i + 1;
            i = frac_end;
        }
    }
    if !mantissa {
        return 0;
    }
    if matches!(b.get(i).copied(), Some(b'e' | b'E')) {
        let mut j = i + 1;
        if matches!(b.get(j).copied(), Some(b'+' | b'-')) { j += 1; }
        let exp_end = digits(j);
        if exp_end > j {
            i = exp_end;
        }
    }
    i
}
