// File: crates/demo/src/main.rs
// Summary: Demo runs the series pipeline on an embedded variant and renders it to SVG.
// Usage: series-demo [close|dual] [theme] [output.svg]

use anyhow::{Context, Result};
use series_core::theme;
use series_core::{Dataset, Loaded, Pipeline};
use series_render_svg::{render_to_svg, RenderOptions};
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let dataset: Dataset = args
        .next()
        .unwrap_or_else(|| "close".to_string())
        .parse()
        .context("choosing embedded dataset")?;
    let theme = theme::find(&args.next().unwrap_or_else(|| "light".to_string()));
    let out = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(format!("target/out/{dataset}.svg")));

    let loaded = Pipeline::load(dataset).with_context(|| format!("loading dataset '{dataset}'"))?;
    summarize(&loaded);

    if !loaded.is_renderable() {
        log::warn!("dataset '{dataset}' has no dated points; writing an empty chart");
    }

    let opts = RenderOptions::default().with_theme(theme);
    render_to_svg(&loaded, &opts, &out)?;
    println!("Wrote {} (theme {})", out.display(), theme.name);
    Ok(())
}

fn summarize(loaded: &Loaded) {
    println!("Loaded {} points ({} undated)", loaded.series.len(), loaded.series.undated());
    let Some(domain) = &loaded.domain else { return };
    println!("Dates: {} .. {} ({} days)", domain.min_date(), domain.max_date(), domain.dates.days());
    for name in loaded.schema.value_columns() {
        match domain.value_domain(name) {
            Some((lo, hi)) => println!("  {name}: [{lo:.2}, {hi:.2}]"),
            None => println!("  {name}: no finite values"),
        }
    }
}
