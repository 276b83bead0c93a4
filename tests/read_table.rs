//! Integration tests for CSV table loading.

use std::io::Write;

use accplot::data::read_accuracy_csv;

fn write_csv(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("observations.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    (dir, path)
}

#[test]
fn reads_rows_in_file_order() {
    let (_dir, path) = write_csv(
        "true_accs,estim_accs,method,dataset\n\
         0.8,0.79,A,imdb\n\
         0.5,0.6,B,imdb\n\
         0.7,0.66,A,yelp\n",
    );
    let table = read_accuracy_csv(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table.records()[0].method, "A");
    assert_eq!(table.records()[1].estim_accs, 0.6);
    assert_eq!(table.methods(), vec!["A", "B"]);
    assert_eq!(table.datasets(), vec!["imdb", "yelp"]);
}

#[test]
fn dataset_column_is_optional() {
    let (_dir, path) = write_csv(
        "true_accs,estim_accs,method\n\
         0.8,0.79,A\n",
    );
    let table = read_accuracy_csv(&path).unwrap();
    assert_eq!(table.records()[0].dataset, None);
}

#[test]
fn malformed_numeric_field_fails_with_file_context() {
    let (_dir, path) = write_csv(
        "true_accs,estim_accs,method\n\
         not_a_number,0.79,A\n",
    );
    let err = read_accuracy_csv(&path).unwrap_err();
    assert!(err.to_string().contains("observations.csv"));
}

#[test]
fn missing_file_fails_with_file_context() {
    let err = read_accuracy_csv("/nonexistent/observations.csv").unwrap_err();
    assert!(err.to_string().contains("observations.csv"));
}
