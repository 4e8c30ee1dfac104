use std::fs;

use chrono::NaiveDate;
use core_types::{DateRange, PricePoint, PriceSeries, Regime, Symbol};
use series_source::{Error, InMemorySource, JsonFileSource, SeriesSource};
use tempfile::tempdir;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

const AAPL: &str = r#"[
    {"date": "2023-01-03", "close": 1.0},
    {"date": "2023-01-04", "close": 2.0},
    {"date": "2023-01-05", "close": 3.0},
    {"date": "2023-01-06", "close": 2.0},
    {"date": "2023-01-09", "close": 1.0},
    {"date": "2023-01-10", "close": null}
]"#;

#[test]
fn json_source_filters_by_range() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("AAPL.json"), AAPL).unwrap();
    let source = JsonFileSource::new(dir.path());

    let range = DateRange::new(date("2023-01-04"), date("2023-01-09")).unwrap();
    let series = source.fetch(&Symbol::new("AAPL"), &range).unwrap();
    let dates: Vec<_> = series.timestamps().collect();
    assert_eq!(
        dates,
        vec![date("2023-01-04"), date("2023-01-05"), date("2023-01-06")]
    );
}

#[test]
fn json_source_keeps_missing_closes() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("AAPL.json"), AAPL).unwrap();
    let source = JsonFileSource::new(dir.path());

    let range = DateRange::new(date("2023-01-01"), date("2023-12-31")).unwrap();
    let series = source.fetch(&Symbol::new("AAPL"), &range).unwrap();
    assert_eq!(series.len(), 6);
    assert!(series.last().unwrap().is_missing());
}

#[test]
fn json_source_reports_unknown_symbol() {
    let dir = tempdir().unwrap();
    let source = JsonFileSource::new(dir.path());
    let range = DateRange::new(date("2023-01-01"), date("2023-12-31")).unwrap();
    assert!(matches!(
        source.fetch(&Symbol::new("MSFT"), &range),
        Err(Error::NotFound(s)) if s == "MSFT"
    ));
}

#[test]
fn json_source_rejects_path_like_symbols() {
    let dir = tempdir().unwrap();
    let source = JsonFileSource::new(dir.path());
    let range = DateRange::new(date("2023-01-01"), date("2023-12-31")).unwrap();
    assert!(matches!(
        source.fetch(&Symbol::new("../secrets"), &range),
        Err(Error::Core(core_types::Error::InvalidParameter { .. }))
    ));
}

#[test]
fn json_source_fails_fast_on_unsorted_file() {
    let dir = tempdir().unwrap();
    fs::write(
        dir.path().join("BTC-USD.json"),
        r#"[{"date": "2023-01-05", "close": 3.0}, {"date": "2023-01-04", "close": 2.0}]"#,
    )
    .unwrap();
    let source = JsonFileSource::new(dir.path());
    let range = DateRange::new(date("2023-01-05"), date("2023-01-06")).unwrap();
    assert!(matches!(
        source.fetch(&Symbol::new("BTC-USD"), &range),
        Err(Error::Core(core_types::Error::MalformedInput(_)))
    ));
}

#[test]
fn json_source_reports_garbage() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("ETH-USD.json"), "not json").unwrap();
    let source = JsonFileSource::new(dir.path());
    let range = DateRange::new(date("2023-01-01"), date("2023-12-31")).unwrap();
    assert!(matches!(
        source.fetch(&Symbol::new("ETH-USD"), &range),
        Err(Error::DeserializationFailed(_))
    ));
}

#[test]
fn memory_source_feeds_the_engine() {
    let points = ["2023-01-03", "2023-01-04", "2023-01-05", "2023-01-06", "2023-01-09"]
        .iter()
        .zip([1.0, 2.0, 3.0, 2.0, 1.0])
        .map(|(d, c)| PricePoint::new(date(d), c))
        .collect();
    let source = InMemorySource::new()
        .with_series(Symbol::new("XRP-USD"), PriceSeries::try_from_points(points).unwrap());

    let range = DateRange::new(date("2023-01-01"), date("2024-01-01")).unwrap();
    let series = source.fetch(&Symbol::new("XRP-USD"), &range).unwrap();
    let out = strategies::compute_signal(&series, 2, 3).unwrap();
    assert_eq!(out.signal.regimes()[2], Regime::Long);
    assert_eq!(out.transitions.len(), 2);

    assert!(matches!(
        source.fetch(&Symbol::new("BCH-USD"), &range),
        Err(Error::NotFound(_))
    ));
}
