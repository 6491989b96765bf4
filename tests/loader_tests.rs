//! Integration tests for the loader module.
//!
//! Tests cover:
//! - Row counts matching the input (files and directories)
//! - All-or-nothing loading on validation failures
//! - Empty inputs, blank headers and whitespace-only lines
//! - Error kinds for missing and malformed input

use indicatif::ProgressBar;
use std::fs;
use std::path::Path;
use tempfile::TempDir;
use walmart_sales::core::loader::{load, read_records, LoadOptions};
use walmart_sales::core::store::SalesStore;
use walmart_sales::{Error, ErrorKind};

const HEADER: &str = "store_id,item_id,cat_id,date,sell_price,units\n";

// ========== TEST FIXTURES ==========

/// Write a CSV file with the standard header and the given data lines.
fn write_csv(dir: &Path, name: &str, lines: &[String]) -> std::path::PathBuf {
    let path = dir.join(name);
    let mut content = HEADER.to_string();
    for line in lines {
        content.push_str(line);
        content.push('\n');
    }
    fs::write(&path, content).unwrap();
    path
}

/// Generate `n` valid data lines spread over stores and categories.
fn generate_lines(n: usize) -> Vec<String> {
    let categories = ["FOODS", "HOBBIES", "HOUSEHOLD"];
    (0..n)
        .map(|i| {
            format!(
                "CA_{},ITEM_{:03},{},2016-{:02}-{:02},{}.{:02},{}",
                i % 4 + 1,
                i,
                categories[i % categories.len()],
                i % 12 + 1,
                i % 28 + 1,
                i % 20,
                i % 100,
                i % 7
            )
        })
        .collect()
}

fn load_path(store: &mut SalesStore, path: &Path) -> walmart_sales::Result<u64> {
    load(store, path, &LoadOptions::default(), &ProgressBar::hidden()).map(|s| s.rows)
}

// ========== ROW COUNT TESTS ==========

#[test]
fn test_row_count_matches_data_lines() {
    let temp_dir = TempDir::new().unwrap();

    for n in [1, 3, 57, 250] {
        let path = write_csv(temp_dir.path(), &format!("sales_{n}.csv"), &generate_lines(n));
        let mut store = SalesStore::open_in_memory().unwrap();

        assert_eq!(load_path(&mut store, &path).unwrap(), n as u64);
        assert_eq!(store.row_count().unwrap(), n as u64);
    }
}

#[test]
fn test_blank_lines_are_not_records() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sales.csv");
    fs::write(
        &path,
        format!("{HEADER}CA_1,A,FOODS,2016-01-01,1.00,1\n\nCA_2,B,FOODS,2016-01-02,1.00,1\n\n"),
    )
    .unwrap();

    let mut store = SalesStore::open_in_memory().unwrap();
    assert_eq!(load_path(&mut store, &path).unwrap(), 2);
}

#[test]
fn test_directory_input() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(temp_dir.path(), "2016_02.csv", &generate_lines(5));
    write_csv(temp_dir.path(), "2016_01.csv", &generate_lines(7));
    fs::write(temp_dir.path().join("README.md"), "not data").unwrap();

    let files = read_records(temp_dir.path(), &LoadOptions::default()).unwrap();
    let counts: Vec<_> = files.iter().map(|f| f.source.records).collect();
    assert_eq!(counts, vec![7, 5]);
    assert!(files.iter().all(|f| f.source.sha256.len() == 64));

    let mut store = SalesStore::open_in_memory().unwrap();
    assert_eq!(load_path(&mut store, temp_dir.path()).unwrap(), 12);
}

// ========== EMPTY INPUT TESTS ==========

#[test]
fn test_empty_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();

    let mut store = SalesStore::open_in_memory().unwrap();
    assert_eq!(load_path(&mut store, &path).unwrap(), 0);
    assert!(store.is_loaded().unwrap());
    assert_eq!(store.row_count().unwrap(), 0);
}

#[test]
fn test_header_only_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = write_csv(temp_dir.path(), "header.csv", &[]);

    let mut store = SalesStore::open_in_memory().unwrap();
    assert_eq!(load_path(&mut store, &path).unwrap(), 0);
}

#[test]
fn test_blank_header_with_data_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let rows = generate_lines(3).join("\n");

    for header in [",,,,", "   "] {
        let path = temp_dir.path().join("sales.csv");
        fs::write(&path, format!("{header}\n{rows}\n")).unwrap();

        let mut store = SalesStore::open_in_memory().unwrap();
        let err = load_path(&mut store, &path).unwrap_err();
        assert!(matches!(err, Error::MissingColumn { .. }), "{header:?}: {err:?}");
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(!store.is_loaded().unwrap());
    }
}

#[test]
fn test_whitespace_only_lines_are_skipped() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sales.csv");
    fs::write(
        &path,
        format!("{HEADER}CA_1,A,FOODS,2016-01-01,1.00,1\n   \n\t\nCA_2,B,FOODS,2016-01-02,1.00,1\n  \n"),
    )
    .unwrap();

    let mut store = SalesStore::open_in_memory().unwrap();
    assert_eq!(load_path(&mut store, &path).unwrap(), 2);
    assert_eq!(store.row_count().unwrap(), 2);
}

// ========== ALL-OR-NOTHING TESTS ==========

#[test]
fn test_missing_required_field_leaves_store_empty() {
    let temp_dir = TempDir::new().unwrap();
    let mut lines = generate_lines(20);
    lines[13] = "CA_1,ITEM_X,FOODS,2016-01-01,,3".to_string();
    let path = write_csv(temp_dir.path(), "sales.csv", &lines);

    let mut store = SalesStore::open_in_memory().unwrap();
    let err = load_path(&mut store, &path).unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Validation);
    match err {
        Error::Validation { line, reason, .. } => {
            assert_eq!(line, 15);
            assert!(reason.contains("sell_price"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!store.is_loaded().unwrap());
}

#[test]
fn test_failed_reload_keeps_previous_table() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_csv(temp_dir.path(), "good.csv", &generate_lines(4));
    let bad = write_csv(
        temp_dir.path(),
        "bad.csv",
        &["CA_1,ITEM_X,FOODS,2016-01-01,1.00,many".to_string()],
    );

    let mut store = SalesStore::open_in_memory().unwrap();
    load_path(&mut store, &good).unwrap();
    assert!(load_path(&mut store, &bad).is_err());
    assert_eq!(store.row_count().unwrap(), 4);
}

#[test]
fn test_bad_file_in_directory_fails_whole_load() {
    let temp_dir = TempDir::new().unwrap();
    write_csv(temp_dir.path(), "a.csv", &generate_lines(3));
    write_csv(
        temp_dir.path(),
        "b.csv",
        &["CA_1,ITEM_X,FOODS,not-a-date,1.00,1".to_string()],
    );

    let mut store = SalesStore::open_in_memory().unwrap();
    let err = load_path(&mut store, temp_dir.path()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);
    assert!(err.to_string().contains("b.csv"));
    assert!(!store.is_loaded().unwrap());
}

#[test]
fn test_missing_column_is_validation_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("sales.csv");
    fs::write(&path, "store_id,date,sell_price,units\nCA_1,2016-01-01,1.0,1\n").unwrap();

    let mut store = SalesStore::open_in_memory().unwrap();
    let err = load_path(&mut store, &path).unwrap_err();
    assert!(matches!(err, Error::MissingColumn { ref column, .. } if column == "cat_id"));
    assert_eq!(err.kind(), ErrorKind::Validation);
}

// ========== IO ERROR TESTS ==========

#[test]
fn test_missing_input_is_io_error() {
    let mut store = SalesStore::open_in_memory().unwrap();
    let err = load_path(&mut store, Path::new("/nonexistent/sales.csv")).unwrap_err();

    assert!(matches!(err, Error::FileNotFound(_)));
    assert_eq!(err.kind(), ErrorKind::Io);
    assert!(!store.is_loaded().unwrap());
}
