// File: crates/series-core/src/domain.rs
// Summary: Domain calculator; date extent and per-series maxima for fitting scales.

use chrono::NaiveDate;

use crate::schema::Schema;
use crate::series::Series;

/// Inclusive date extent. Contract: `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    pub fn days(&self) -> i64 { (self.max - self.min).num_days() }
}

/// What a renderer needs to size its time and value scales.
/// Vertical domains always start at zero so every series shares one baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct Domain {
    pub dates: DateRange,
    max_values: Vec<(String, Option<f64>)>,
}

impl Domain {
    /// Reduce a sorted series to its domain. `None` when no point has a date,
    /// which callers treat as "nothing to render".
    pub fn compute(series: &Series, schema: &Schema) -> Option<Self> {
        let mut dates = series.iter().filter_map(|p| p.date);
        let first = dates.next()?;
        let (min, max) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));

        let max_values = schema
            .value_columns()
            .iter()
            .map(|name| {
                let max = series
                    .iter()
                    .filter_map(|p| p.value(name))
                    .filter(|v| v.is_finite())
                    .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))));
                (name.clone(), max)
            })
            .collect();

        Some(Self { dates: DateRange { min, max }, max_values })
    }

    pub fn min_date(&self) -> NaiveDate { self.dates.min }
    pub fn max_date(&self) -> NaiveDate { self.dates.max }

    /// Largest finite value of series `name`; `None` if it has none.
    pub fn max_value(&self, name: &str) -> Option<f64> {
        self.max_values.iter().find(|(n, _)| n == name).and_then(|(_, v)| *v)
    }

    /// `[0, max]` for one series.
    pub fn value_domain(&self, name: &str) -> Option<(f64, f64)> {
        self.max_value(name).map(|m| (0.0, m))
    }

    /// `[0, max]` over every series, for charts drawing all series on one axis.
    pub fn shared_value_domain(&self) -> Option<(f64, f64)> {
        self.max_values
            .iter()
            .filter_map(|(_, v)| *v)
            .reduce(f64::max)
            .map(|m| (0.0, m))
    }
}
