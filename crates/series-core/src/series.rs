// File: crates/series-core/src/series.rs
// Summary: Series model (points in chronological order) and the null-tolerant sorter.
// Notes:
// - Points with no date are never dropped; they stay wherever the merge leaves them.
// - `slice::sort_by` may panic on comparators that are not a total order, so the
//   merge sort below is used instead.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::point::Point;

/// Chronological ordering; any missing date compares equal to everything.
pub fn compare_dates(a: &Point, b: &Point) -> Ordering {
    match (a.date, b.date) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => Ordering::Equal,
    }
}

/// Stable top-down merge sort. Ties (and missing dates) keep the left element first.
pub fn sort_points(points: Vec<Point>) -> Vec<Point> {
    merge_sort(points, &compare_dates)
}

fn merge_sort<T, F>(mut v: Vec<T>, cmp: &F) -> Vec<T>
where
    F: Fn(&T, &T) -> Ordering,
{
    if v.len() <= 1 {
        return v;
    }
    let right = v.split_off(v.len() / 2);
    let left = merge_sort(v, cmp);
    let right = merge_sort(right, cmp);

    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut l = left.into_iter().peekable();
    let mut r = right.into_iter().peekable();
    loop {
        let take_right = match (l.peek(), r.peek()) {
            (Some(a), Some(b)) => cmp(a, b) == Ordering::Greater,
            (Some(_), None) => false,
            (None, Some(_)) => true,
            (None, None) => break,
        };
        let next = if take_right { r.next() } else { l.next() };
        out.extend(next);
    }
    out
}

/// Sorted points for one load. Immutable once built.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    /// Sort `points` chronologically and freeze them.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points: sort_points(points) }
    }

    pub fn points(&self) -> &[Point] { &self.points }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn iter(&self) -> std::slice::Iter<'_, Point> { self.points.iter() }

    /// Points that carry no usable date.
    pub fn undated(&self) -> usize {
        self.points.iter().filter(|p| p.date.is_none()).count()
    }

    /// `(date, value)` pairs of one series that a renderer can place:
    /// points without a date or with a non-finite value are skipped.
    pub fn plottable<'a>(&'a self, name: &'a str) -> impl Iterator<Item = (NaiveDate, f64)> + 'a {
        self.points.iter().filter_map(move |p| {
            let date = p.date?;
            let v = p.value(name)?;
            v.is_finite().then_some((date, v))
        })
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
