// File: crates/series-render-svg/tests/render.rs
// Purpose: SVG structure for embedded variants, undated rows, and empty input.

use series_core::{Dataset, Pipeline, Schema, Theme};
use series_render_svg::{render_to_string, render_to_svg, RenderOptions};

fn count(haystack: &str, needle: &str) -> usize {
    haystack.matches(needle).count()
}

fn path_data(svg: &str) -> Option<&str> {
    let start = svg.find(r#"<path class="line""#)?;
    let rest = &svg[start..];
    let d = rest.find(" d=\"")? + 4;
    let end = rest[d..].find('"')?;
    Some(&rest[d..d + end])
}

#[test]
fn close_variant_draws_one_line_and_all_markers() {
    let loaded = Pipeline::load(Dataset::Close).unwrap();
    let svg = render_to_string(&loaded, &RenderOptions::default()).unwrap();
    assert!(svg.starts_with("<svg"));
    assert!(svg.trim_end().ends_with("</svg>"));
    assert_eq!(count(&svg, r#"<path class="line""#), 1);
    assert_eq!(count(&svg, "<circle"), loaded.series.len());
    assert!(svg.contains(r#"stroke="steelblue""#));
    assert!(svg.contains(r#"data-tooltip="close: 58.13""#));
}

#[test]
fn dual_variant_cycles_colors_per_pass() {
    let loaded = Pipeline::load(Dataset::CloseOpen).unwrap();
    let opts = RenderOptions::default();
    let first = render_to_string(&loaded, &opts).unwrap();
    let second = render_to_string(&loaded, &opts).unwrap();
    assert_eq!(count(&first, r#"<path class="line""#), 2);
    assert!(first.contains(r#"data-series="close""#));
    assert!(first.contains(r#"data-series="open""#));
    assert!(first.contains(r#"stroke="steelblue""#));
    assert!(first.contains(r##"stroke="#dc3c3c""##));
    // colors do not drift between passes
    assert_eq!(first, second);
    assert!(first.contains("close: 58.13&#10;open: 3.41"));
}

#[test]
fn undated_rows_are_not_drawn() {
    let loaded = Pipeline::default().run("bad,5\n01-May-20,1\n02-May-20,2").unwrap();
    assert_eq!(loaded.series.len(), 3);
    let svg = render_to_string(&loaded, &RenderOptions::default()).unwrap();
    assert_eq!(count(&svg, "<circle"), 2);
    let d = path_data(&svg).expect("one line path");
    assert_eq!(count(d, "M"), 1);
    assert_eq!(count(d, "L"), 1);
}

#[test]
fn nan_values_are_not_drawn() {
    let loaded = Pipeline::new(Schema::close_open()).run("01-May-20,1,x\n02-May-20,2,y").unwrap();
    let svg = render_to_string(&loaded, &RenderOptions::default()).unwrap();
    assert_eq!(count(&svg, r#"<path class="line""#), 1);
    assert_eq!(count(&svg, "<circle"), 2);
}

#[test]
fn empty_input_renders_blank_canvas() {
    let loaded = Pipeline::default().run("").unwrap();
    let svg = render_to_string(&loaded, &RenderOptions::default()).unwrap();
    assert!(!svg.contains("<path"));
    assert!(!svg.contains("<circle"));
    assert!(svg.contains("<rect"));
}

#[test]
fn labels_can_be_switched_off() {
    let loaded = Pipeline::load(Dataset::Close).unwrap();
    let mut opts = RenderOptions::default().with_theme(Theme::dark());
    assert!(render_to_string(&loaded, &opts).unwrap().contains("<text"));
    opts.draw_labels = false;
    let svg = render_to_string(&loaded, &opts).unwrap();
    assert!(!svg.contains("<text"));
    assert!(svg.contains(Theme::dark().background));
}

#[test]
fn writes_file() {
    let loaded = Pipeline::load(Dataset::Close).unwrap();
    let out = std::path::PathBuf::from("target/test_out/close.svg");
    render_to_svg(&loaded, &RenderOptions::default(), &out).expect("render should succeed");
    let text = std::fs::read_to_string(&out).expect("output exists");
    assert!(text.starts_with("<svg"));
}
