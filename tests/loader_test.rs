//! Tests for the catalog loader

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use rsplan::application::{load_catalog, ApplicationError};
use rsplan::domain::CourseCatalog;
use rsplan::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

fn create_catalog_file(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).expect("write catalog file");
    path
}

// ============================================================
// Well-Formed Input Tests
// ============================================================

#[test]
fn given_valid_file_when_loading_then_all_courses_inserted() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = create_catalog_file(
        &temp,
        "courses.csv",
        "CS100,Intro to CS\nCS200,Discrete Math,CS100\nCS300,Data Structures,CS200,MATH120\n",
    );
    let mut catalog = CourseCatalog::new();

    // Act
    let summary = load_catalog(&path, &mut catalog).unwrap();

    // Assert
    assert_eq!(summary.inserted, 3);
    assert!(summary.skipped.is_empty());
    let ids: Vec<_> = catalog.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, ["CS100", "CS200", "CS300"]);
    assert_eq!(
        catalog.get("CS300").unwrap().prerequisites,
        ["CS200", "MATH120"]
    );
}

#[test]
fn given_mixed_case_padded_file_when_loading_then_normalized() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog_file(
        &temp,
        "courses.csv",
        "  cs100 ,  Intro to CS  \ncs300, Data Structures , cs100 ,, math120\n",
    );
    let mut catalog = CourseCatalog::new();

    load_catalog(&path, &mut catalog).unwrap();

    let intro = catalog.get("CS100").expect("id uppercased");
    assert_eq!(intro.title, "Intro to CS");
    let ds = catalog.get("CS300").unwrap();
    // Prereqs uppercased, empty field dropped
    assert_eq!(ds.prerequisites, ["CS100", "MATH120"]);
}

#[test]
fn given_blank_lines_when_loading_then_skipped_silently() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog_file(&temp, "courses.csv", "\nCS100,Intro\n   \n\nCS200,Math\n");
    let mut catalog = CourseCatalog::new();

    let summary = load_catalog(&path, &mut catalog).unwrap();

    assert_eq!(summary.inserted, 2);
    assert!(summary.skipped.is_empty(), "blank lines are not warnings");
}

#[test]
fn given_duplicate_ids_in_file_when_loading_then_last_line_wins() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog_file(&temp, "courses.csv", "CS300,DS\ncs300,Data Structures\n");
    let mut catalog = CourseCatalog::new();

    let summary = load_catalog(&path, &mut catalog).unwrap();

    // Both lines parse and insert; the second overwrites the first
    assert_eq!(summary.inserted, 2);
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get("CS300").unwrap().title, "Data Structures");
}

// ============================================================
// Malformed Input Tests
// ============================================================

#[test]
fn given_short_lines_when_loading_then_skipped_with_warning() {
    let temp = TempDir::new().unwrap();
    let path = create_catalog_file(&temp, "courses.csv", "CS100,Intro\nCS999\nCS200,Math\n");
    let mut catalog = CourseCatalog::new();

    let summary = load_catalog(&path, &mut catalog).unwrap();

    assert_eq!(summary.inserted, 2);
    assert_eq!(summary.skipped.len(), 1);
    assert_eq!(summary.skipped[0].line_number, 2);
    assert_eq!(summary.skipped[0].content, "CS999");
    assert!(catalog.get("CS999").is_none());
}

// ============================================================
// Failed Open Tests
// ============================================================

#[test]
fn given_missing_file_when_loading_then_error_and_catalog_cleared() {
    // The clear happens before the open is attempted, so a failed reload
    // discards previously loaded data instead of merging with it.
    let temp = TempDir::new().unwrap();
    let good = create_catalog_file(&temp, "courses.csv", "CS100,Intro\n");
    let mut catalog = CourseCatalog::new();
    load_catalog(&good, &mut catalog).unwrap();
    assert!(!catalog.is_empty());

    let result = load_catalog(Path::new("/nonexistent/courses.csv"), &mut catalog);

    assert!(matches!(result, Err(ApplicationError::FileNotFound(_))));
    assert!(catalog.is_empty(), "failed reload leaves the catalog empty");
}

#[test]
fn given_failed_load_when_reloading_good_file_then_usable_again() {
    let temp = TempDir::new().unwrap();
    let good = create_catalog_file(&temp, "courses.csv", "CS100,Intro\n");
    let mut catalog = CourseCatalog::new();

    assert!(load_catalog(Path::new("/nonexistent/courses.csv"), &mut catalog).is_err());
    let summary = load_catalog(&good, &mut catalog).unwrap();

    assert_eq!(summary.inserted, 1);
    assert_eq!(catalog.get("CS100").unwrap().title, "Intro");
}

// ============================================================
// Reload Tests
// ============================================================

#[test]
fn given_second_load_when_loading_then_prior_contents_replaced() {
    let temp = TempDir::new().unwrap();
    let first = create_catalog_file(&temp, "first.csv", "CS100,Intro\nCS200,Math\n");
    let second = create_catalog_file(&temp, "second.csv", "CS300,DS\n");
    let mut catalog = CourseCatalog::new();

    load_catalog(&first, &mut catalog).unwrap();
    load_catalog(&second, &mut catalog).unwrap();

    // No merge with stale data
    assert_eq!(catalog.len(), 1);
    assert!(catalog.get("CS100").is_none());
    assert!(catalog.get("CS300").is_some());
}
