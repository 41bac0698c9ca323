// File: crates/series-render-svg/src/lib.rs
// Summary: SVG renderer crate; draws a loaded series as a line-and-scatter chart.

pub mod types;
pub mod chart;

pub use chart::{render_to_string, render_to_svg};
pub use types::{Insets, RenderOptions};
