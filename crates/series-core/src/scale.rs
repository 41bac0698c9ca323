// File: crates/series-core/src/scale.rs
// Summary: Time (X) and value (Y) scales fitted from a domain onto a pixel range.

use chrono::{Duration, NaiveDate};

use crate::domain::DateRange;

/// Evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Horizontal scale mapping a date range onto `[left_px, right_px]`.
#[derive(Clone, Copy, Debug)]
pub struct TimeScale {
    pub left_px: f32,
    pub right_px: f32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl TimeScale {
    pub fn new(range: DateRange, left_px: f32, right_px: f32) -> Self {
        Self { left_px, right_px, start: range.min, end: range.max }
    }

    // A single-day range still gets one day of width.
    fn span_days(&self) -> f64 {
        ((self.end - self.start).num_days() as f64).max(1.0)
    }

    #[inline]
    pub fn to_px(&self, date: NaiveDate) -> f32 {
        let t = (date - self.start).num_days() as f64 / self.span_days();
        self.left_px + t as f32 * (self.right_px - self.left_px)
    }

    /// Nearest whole day under pixel `px`, for hover lookups; clamped to the range.
    #[inline]
    pub fn from_px(&self, px: f32) -> NaiveDate {
        let width = (self.right_px - self.left_px).max(1.0);
        let days = ((px - self.left_px) / width) as f64 * self.span_days();
        let fallback = if days > 0.0 { self.end } else { self.start };
        Duration::try_days(days.round() as i64)
            .and_then(|d| self.start.checked_add_signed(d))
            .unwrap_or(fallback)
            .clamp(self.start, self.end)
    }

    /// Up to `n` distinct tick dates spread across the range, both ends included.
    pub fn ticks(&self, n: usize) -> Vec<NaiveDate> {
        let days = (self.end - self.start).num_days() as f64;
        let mut out: Vec<NaiveDate> = linspace(0.0, days, n)
            .into_iter()
            .map(|d| self.start + Duration::days(d.round() as i64))
            .collect();
        out.dedup();
        out
    }
}

/// Vertical linear scale mapping `[vmin, vmax]` onto `[bottom_px, top_px]`.
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    pub top_px: f32,
    pub bottom_px: f32,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// Zero-width domains (e.g. every value is 0) are widened by one unit.
    pub fn new(domain: (f64, f64), top_px: f32, bottom_px: f32) -> Self {
        let (vmin, mut vmax) = domain;
        if (vmax - vmin).abs() < 1e-12 { vmax = vmin + 1.0; }
        Self { top_px, bottom_px, vmin, vmax }
    }

    #[inline]
    pub fn to_px(&self, y: f64) -> f32 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.bottom_px - ((y - self.vmin) / span) as f32 * (self.bottom_px - self.top_px)
    }

    #[inline]
    pub fn from_px(&self, py: f32) -> f64 {
        let span = (self.vmax - self.vmin).max(1e-12);
        self.vmin + ((self.bottom_px - py) / (self.bottom_px - self.top_px)) as f64 * span
    }

    pub fn ticks(&self, n: usize) -> Vec<f64> {
        linspace(self.vmin, self.vmax, n)
    }
}
