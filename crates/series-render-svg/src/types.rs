// File: crates/series-render-svg/src/types.rs
// Summary: Canvas size, margins and drawing options.

use series_core::Theme;

/// Default canvas width in pixels.
pub const WIDTH: u32 = 960;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 500;

/// Margins around the plot area, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(70, 20, 20, 50)
    }
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    pub insets: Insets,
    pub theme: Theme,
    pub marker_radius: f32,
    pub line_width: f32,
    pub x_ticks: usize,
    pub y_ticks: usize,
    /// Axis tick labels; off for byte-stable snapshots.
    pub draw_labels: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::default(),
            marker_radius: 5.0,
            line_width: 2.0,
            x_ticks: 8,
            y_ticks: 6,
            draw_labels: true,
        }
    }
}

impl RenderOptions {
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Plot area as (left, top, right, bottom); never narrower than one pixel.
    pub fn plot_rect(&self) -> (f32, f32, f32, f32) {
        let l = self.insets.left as f32;
        let t = self.insets.top as f32;
        let r = (self.width.saturating_sub(self.insets.right) as f32).max(l + 1.0);
        let b = (self.height.saturating_sub(self.insets.bottom) as f32).max(t + 1.0);
        (l, t, r, b)
    }
}
