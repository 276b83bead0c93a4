//! Integration tests for figure export: file creation, overwrite behavior,
//! and directory auto-creation.

use accplot::config::PlotConfig;
use accplot::data::{AccuracyRecord, AccuracyTable};
use accplot::paths::{PlotIdentity, PlotPaths};
use accplot::plots::{plot_diagonal, plot_diagonal_grid};

fn record(
    true_accs: f64,
    estim_accs: f64,
    method: &str,
    dataset: Option<&str>,
) -> AccuracyRecord {
    AccuracyRecord {
        true_accs,
        estim_accs,
        method: method.to_string(),
        dataset: dataset.map(str::to_string),
    }
}

fn two_method_table(dataset: Option<&str>) -> AccuracyTable {
    AccuracyTable::new(vec![
        record(0.8, 0.79, "A", dataset),
        record(0.5, 0.6, "B", dataset),
    ])
}

// ---------------------------------------------------------------------------
// diagonal plot
// ---------------------------------------------------------------------------

#[test]
fn diagonal_export_writes_both_formats_at_predicted_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::nested(dir.path());
    let identity = PlotIdentity::diagonal("clf1", Some("f1"), "mnist");

    let files = plot_diagonal(&two_method_table(None), &identity, &config).unwrap();
    assert_eq!(files.len(), 2);

    let resolver = PlotPaths::new(dir.path(), config.layout);
    for (file, format) in files.iter().zip(accplot::paths::EXPORT_FORMATS) {
        assert_eq!(file, &resolver.resolve(&identity, format));
        let meta = std::fs::metadata(file).unwrap();
        assert!(meta.len() > 0, "{} is empty", file.display());
    }
}

#[test]
fn export_creates_missing_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::nested(dir.path().join("deeply").join("nested"));
    let identity = PlotIdentity::diagonal("clf1", Some("f1"), "mnist");

    let files = plot_diagonal(&two_method_table(None), &identity, &config).unwrap();
    for file in &files {
        assert!(file.exists(), "{} missing", file.display());
    }
}

#[test]
fn re_export_overwrites_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::nested(dir.path());
    let identity = PlotIdentity::diagonal("clf1", Some("f1"), "mnist");
    let table = two_method_table(None);

    let first = plot_diagonal(&table, &identity, &config).unwrap();
    let second = plot_diagonal(&table, &identity, &config).unwrap();
    assert_eq!(first, second);
    for file in &second {
        assert!(std::fs::metadata(file).unwrap().len() > 0);
    }
}

#[test]
fn empty_table_still_exports() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::compact(dir.path());
    let identity = PlotIdentity::diagonal("clf1", None, "mnist");

    let files = plot_diagonal(&AccuracyTable::default(), &identity, &config).unwrap();
    assert_eq!(files.len(), 2);
}

// ---------------------------------------------------------------------------
// grid plot
// ---------------------------------------------------------------------------

#[test]
fn grid_export_writes_both_formats() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::nested(dir.path());
    let identity = PlotIdentity::grid("clf1", Some("f1"));

    let mut table = AccuracyTable::default();
    for dataset in ["imdb", "yelp", "amazon"] {
        table.push(record(0.8, 0.79, "A", Some(dataset)));
        table.push(record(0.5, 0.6, "B", Some(dataset)));
    }

    let files = plot_diagonal_grid(&table, &identity, 2, &config).unwrap();
    assert_eq!(files.len(), 2);
    for file in &files {
        assert!(std::fs::metadata(file).unwrap().len() > 0);
        assert!(file.ends_with(
            std::path::Path::new("all").join(file.file_name().unwrap())
        ));
    }
}

#[test]
fn grid_rows_without_dataset_fail() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::nested(dir.path());
    let identity = PlotIdentity::grid("clf1", Some("f1"));

    let err = plot_diagonal_grid(&two_method_table(None), &identity, 2, &config)
        .unwrap_err();
    assert!(err.to_string().contains("dataset"), "unexpected: {}", err);
}

#[test]
fn single_dataset_grid_renders_one_panel() {
    let dir = tempfile::tempdir().unwrap();
    let config = PlotConfig::nested(dir.path());
    let identity = PlotIdentity::grid("clf1", None);

    let files =
        plot_diagonal_grid(&two_method_table(Some("imdb")), &identity, 3, &config).unwrap();
    assert_eq!(files.len(), 2);
}
