// File: crates/series-core/tests/schema.rs
// Purpose: Schema validation, dataset lookup, tooltip formatting.

use series_core::{Dataset, Pipeline, Schema, SeriesError};

#[test]
fn rejects_invalid_schemas() {
    assert!(matches!(Schema::new("date", Vec::<String>::new()), Err(SeriesError::EmptySchema)));
    assert!(matches!(Schema::new("date", ["close", ""]), Err(SeriesError::EmptyColumnName)));
    assert!(matches!(Schema::new("", ["close"]), Err(SeriesError::EmptyColumnName)));
    assert!(matches!(
        Schema::new("date", ["close", "close"]),
        Err(SeriesError::DuplicateColumn(c)) if c == "close"
    ));
    assert!(matches!(Schema::new("date", ["date"]), Err(SeriesError::DuplicateColumn(_))));
}

#[test]
fn default_schema_is_single_close() {
    let s = Schema::default();
    assert_eq!(s.date_column(), "date");
    assert_eq!(s.value_columns(), ["close"]);
    assert_eq!(s.delimiter(), b',');
    assert_eq!(s.date_format(), "%d-%b-%y");
    assert_eq!(s.width(), 2);
}

#[test]
fn dataset_names_round_trip() {
    for d in Dataset::all() {
        assert_eq!(d.name().parse::<Dataset>().unwrap(), d);
    }
    assert_eq!(" DUAL ".parse::<Dataset>().unwrap(), Dataset::CloseOpen);
    assert!(matches!("volume".parse::<Dataset>(), Err(SeriesError::UnknownDataset(_))));
}

#[test]
fn tooltip_lists_values_in_column_order() {
    let loaded = Pipeline::new(Schema::close_open()).run("01-May-20,58.1,abc").unwrap();
    let p = &loaded.series.points()[0];
    assert_eq!(p.tooltip(&loaded.schema), "close: 58.10\nopen: NaN");

    let single = Pipeline::default().run("01-May-20,7").unwrap();
    assert_eq!(single.series.points()[0].tooltip(&single.schema), "close: 7.00");
}
