// File: crates/series-render-svg/src/chart.rs
// Summary: Renders a `Loaded` pipeline result to an SVG document.
// Points without a date are never drawn; neither are non-finite values.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use series_core::{Domain, Loaded, Series, Theme, TimeScale, ValueScale};

use crate::types::RenderOptions;

/// Render to an in-memory SVG document. Without a domain only the empty canvas is drawn.
pub fn render_to_string(loaded: &Loaded, opts: &RenderOptions) -> Result<String> {
    let mut out = String::new();
    let theme = &opts.theme;
    writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = opts.width,
        h = opts.height
    )?;
    writeln!(out, r#"<rect width="100%" height="100%" fill="{}"/>"#, theme.background)?;

    let Some(domain) = &loaded.domain else {
        log::info!("no domain; writing empty canvas");
        out.push_str("</svg>\n");
        return Ok(out);
    };
    let (l, t, r, b) = opts.plot_rect();
    let x = TimeScale::new(domain.dates, l, r);
    let y = ValueScale::new(domain.shared_value_domain().unwrap_or((0.0, 1.0)), t, b);

    draw_grid(&mut out, theme, &x, &y, opts)?;

    // one palette cursor per pass
    let mut palette = theme.palette();
    for name in loaded.schema.value_columns() {
        let color = palette.next_color();
        draw_line_series(&mut out, &loaded.series, name, color, &x, &y, opts)?;
    }
    draw_markers(&mut out, loaded, &x, &y, opts)?;
    draw_axes(&mut out, theme, domain, &x, &y, opts)?;

    out.push_str("</svg>\n");
    Ok(out)
}

/// Render to an SVG file at `output_svg_path`, creating parent directories.
pub fn render_to_svg(loaded: &Loaded, opts: &RenderOptions, output_svg_path: impl AsRef<Path>) -> Result<()> {
    let path = output_svg_path.as_ref();
    let svg = render_to_string(loaded, opts)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, svg).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

// ---- helpers ----------------------------------------------------------------

fn draw_grid(out: &mut String, theme: &Theme, x: &TimeScale, y: &ValueScale, opts: &RenderOptions) -> std::fmt::Result {
    writeln!(out, r#"<g class="grid" stroke="{}" stroke-width="1">"#, theme.grid)?;
    for d in x.ticks(opts.x_ticks) {
        let px = x.to_px(d);
        writeln!(out, r#"<line x1="{px:.1}" y1="{:.1}" x2="{px:.1}" y2="{:.1}"/>"#, y.top_px, y.bottom_px)?;
    }
    for v in y.ticks(opts.y_ticks) {
        let py = y.to_px(v);
        writeln!(out, r#"<line x1="{:.1}" y1="{py:.1}" x2="{:.1}" y2="{py:.1}"/>"#, x.left_px, x.right_px)?;
    }
    writeln!(out, "</g>")
}

fn draw_line_series(
    out: &mut String,
    series: &Series,
    name: &str,
    color: &str,
    x: &TimeScale,
    y: &ValueScale,
    opts: &RenderOptions,
) -> std::fmt::Result {
    let mut d = String::new();
    for (i, (date, v)) in series.plottable(name).enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        write!(d, "{cmd}{:.2},{:.2}", x.to_px(date), y.to_px(v))?;
    }
    if d.is_empty() {
        log::debug!("series {name}: nothing plottable");
        return Ok(());
    }
    writeln!(
        out,
        r#"<path class="line" data-series="{}" d="{d}" fill="none" stroke="{color}" stroke-width="{}"/>"#,
        escape(name),
        opts.line_width
    )
}

fn draw_markers(out: &mut String, loaded: &Loaded, x: &TimeScale, y: &ValueScale, opts: &RenderOptions) -> std::fmt::Result {
    writeln!(out, r#"<g class="dots" fill="{}">"#, opts.theme.marker)?;
    for p in loaded.series.iter() {
        let Some(date) = p.date else { continue };
        let tip = escape(&p.tooltip(&loaded.schema));
        for name in loaded.schema.value_columns() {
            let Some(v) = p.value(name).filter(|v| v.is_finite()) else { continue };
            writeln!(
                out,
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" data-tooltip="{tip}"><title>{tip}</title></circle>"#,
                x.to_px(date),
                y.to_px(v),
                opts.marker_radius
            )?;
        }
    }
    writeln!(out, "</g>")
}

fn draw_axes(
    out: &mut String,
    theme: &Theme,
    domain: &Domain,
    x: &TimeScale,
    y: &ValueScale,
    opts: &RenderOptions,
) -> std::fmt::Result {
    let (l, t, r, b) = (x.left_px, y.top_px, x.right_px, y.bottom_px);
    writeln!(out, r#"<g class="axis" stroke="{}" stroke-width="1.5">"#, theme.axis_line)?;
    writeln!(out, r#"<line x1="{l:.1}" y1="{b:.1}" x2="{r:.1}" y2="{b:.1}"/>"#)?;
    writeln!(out, r#"<line x1="{l:.1}" y1="{t:.1}" x2="{l:.1}" y2="{b:.1}"/>"#)?;
    writeln!(out, "</g>")?;
    if !opts.draw_labels {
        return Ok(());
    }

    writeln!(out, r#"<g class="labels" fill="{}" font-family="sans-serif" font-size="10">"#, theme.axis_label)?;
    for d in x.ticks(opts.x_ticks) {
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{}</text>"#,
            x.to_px(d),
            b + 16.0,
            d.format("%b %d")
        )?;
    }
    let decimals: usize = if y.vmax - y.vmin < 10.0 { 2 } else { 0 };
    for v in y.ticks(opts.y_ticks) {
        writeln!(
            out,
            r#"<text x="{:.1}" y="{:.1}" text-anchor="end">{v:.decimals$}</text>"#,
            l - 8.0,
            y.to_px(v) + 3.0
        )?;
    }
    writeln!(
        out,
        r#"<text x="{:.1}" y="{:.1}" text-anchor="middle">{} – {}</text>"#,
        (l + r) / 2.0,
        b + 38.0,
        domain.min_date().format("%d %b %Y"),
        domain.max_date().format("%d %b %Y")
    )?;
    writeln!(out, "</g>")
}

fn escape(text: &str) -> String {
    let mut s = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => s.push_str("&amp;"),
            '<' => s.push_str("&lt;"),
            '>' => s.push_str("&gt;"),
            '"' => s.push_str("&quot;"),
            '\n' => s.push_str("&#10;"),
            _ => s.push(c),
        }
    }
    s
}
