// File: crates/series-core/src/point.rs
// Summary: Parsed point (optional date + one value per configured series) and tooltip text.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use chrono::NaiveDate;

use crate::record::{parse_date, parse_value, Record};
use crate::schema::Schema;

/// One parsed row.
/// Contract: `values` holds exactly one entry per schema value column;
/// `date` is `None` only when the date text did not match the schema's format.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub date: Option<NaiveDate>,
    pub values: BTreeMap<String, f64>,
}

impl Point {
    pub fn from_record(record: &Record, schema: &Schema) -> Self {
        let date = parse_date(&record.date, schema.date_format());
        if date.is_none() {
            log::debug!("unparsable date {:?} (format {})", record.date, schema.date_format());
        }
        let values = schema
            .value_columns()
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let v = record.fields.get(i).map_or(f64::NAN, |f| parse_value(f));
                (name.clone(), v)
            })
            .collect();
        Self { date, values }
    }

    /// Value of series `name`; `None` if the schema has no such column.
    pub fn value(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Hover text: one `name: value` line per value column, in schema order.
    pub fn tooltip(&self, schema: &Schema) -> String {
        let mut out = String::new();
        for name in schema.value_columns() {
            if !out.is_empty() {
                out.push('\n');
            }
            match self.value(name) {
                Some(v) if v.is_nan() => { let _ = write!(out, "{name}: NaN"); }
                Some(v) => { let _ = write!(out, "{name}: {v:.2}"); }
                None => { let _ = write!(out, "{name}: -"); }
            }
        }
        out
    }
}
