// File: crates/series-core/src/pipeline.rs
// Summary: Pipeline facade; raw text -> records -> points -> sorted series -> domain.

use crate::data::Dataset;
use crate::domain::Domain;
use crate::error::Result;
use crate::point::Point;
use crate::record::read_records;
use crate::schema::Schema;
use crate::series::Series;

/// Everything a renderer consumes from one load.
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded {
    pub schema: Schema,
    pub series: Series,
    /// `None` means nothing to draw.
    pub domain: Option<Domain>,
}

impl Loaded {
    pub fn is_renderable(&self) -> bool { self.domain.is_some() }
}

/// Runs the whole parse/sort/fit chain for one schema. Synchronous and pure.
#[derive(Clone, Debug, Default)]
pub struct Pipeline {
    schema: Schema,
}

impl Pipeline {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema { &self.schema }

    /// Parse `text`. Malformed rows are kept with a missing date or `NaN` values.
    pub fn run(&self, text: &str) -> Result<Loaded> {
        let records = read_records(text, &self.schema)?;
        let points: Vec<Point> = records
            .iter()
            .map(|r| Point::from_record(r, &self.schema))
            .collect();
        let series = Series::from_points(points);
        let domain = Domain::compute(&series, &self.schema);

        log::info!(
            "parsed {} points ({} undated) across {} series",
            series.len(),
            series.undated(),
            self.schema.value_columns().len()
        );
        match &domain {
            Some(d) => log::debug!(
                "domain {}..{}, shared value domain {:?}",
                d.min_date(),
                d.max_date(),
                d.shared_value_domain()
            ),
            None => log::info!("no dated points; nothing to render"),
        }

        Ok(Loaded { schema: self.schema.clone(), series, domain })
    }

    /// Load one of the embedded blobs with its own schema.
    pub fn load(dataset: Dataset) -> Result<Loaded> {
        Pipeline::new(dataset.schema()).run(dataset.text())
    }
}
