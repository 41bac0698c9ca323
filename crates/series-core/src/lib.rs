// File: crates/series-core/src/lib.rs
// Summary: Core library entry point; exports the series pipeline and the types renderers consume.

pub mod error;
pub mod schema;
pub mod data;
pub mod record;
pub mod point;
pub mod series;
pub mod domain;
pub mod scale;
pub mod theme;
pub mod pipeline;

pub use error::{Result, SeriesError};
pub use schema::Schema;
pub use data::Dataset;
pub use record::{read_records, Record};
pub use point::Point;
pub use series::Series;
pub use domain::{DateRange, Domain};
pub use scale::{TimeScale, ValueScale};
pub use theme::{PaletteCursor, Theme};
pub use pipeline::{Loaded, Pipeline};
