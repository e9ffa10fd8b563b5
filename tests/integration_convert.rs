//! Integration tests for end-to-end catalog conversion
//!
//! These tests write small catalogs to temporary files and check the CSV
//! table produced by `convert_file`.

use hypocat::{CatalogConverter, CatalogError, ConverterConfig, convert_file};
use std::fs;
use tempfile::TempDir;

const FUKUOKA: &str =
    "2025  5  3 09:47 10.2  33° 43.2'N 130° 11.8'E    5     0.2  福岡県北西沖";
const SUMATRA: &str =
    "2024 12 31 23:59 9.25   5°  7.5'N  98° 59.9'E 12.5     4.1  SUMATRA";
const CHILE_NO_MAG: &str =
    "2023  1 15 04:05 06.7  30°  0.0'S  71° 30.0'W   40      -    CENTRAL CHILE";

/// Write `lines` as a catalog file and return (temp dir, input path, output path)
fn catalog_with(lines: &[&str]) -> (TempDir, std::path::PathBuf, std::path::PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("catalog.txt");
    let output = temp_dir.path().join("out").join("catalog.csv");
    fs::write(&input, lines.join("\n")).unwrap();
    (temp_dir, input, output)
}

fn read_rows(path: &std::path::Path) -> Vec<String> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|l| l.to_string())
        .collect()
}

#[tokio::test]
async fn test_full_catalog_conversion() {
    let (_dir, input, output) = catalog_with(&[
        "# hypocenter list",
        "#  yyyy mm dd hh:mm ss.f   lat        lon      dep   mag  place",
        FUKUOKA,
        "",
        SUMATRA,
        CHILE_NO_MAG,
    ]);

    let stats = convert_file(&input, &output, &ConverterConfig::default())
        .await
        .unwrap();

    assert_eq!(stats.records_parsed, 3);
    assert_eq!(stats.skipped_lines, 3);
    assert_eq!(stats.lines_failed, 0);

    let rows = read_rows(&output);
    assert_eq!(
        rows,
        vec![
            "date,time,lat,lon,dep,Mjma,location",
            "2025-05-03,09:47:10.2,33.7200,130.1967,5,0.2,福岡県北西沖",
            "2024-12-31,23:59:09.25,5.1250,98.9983,12.5,4.1,SUMATRA",
            "2023-01-15,04:05:06.7,-30.0000,-71.5000,40,,CENTRAL CHILE",
        ]
    );
}

#[tokio::test]
async fn test_one_malformed_line_among_good_ones() {
    let broken = FUKUOKA.replacen("09:47", "09:xx", 1);
    let (_dir, input, output) = catalog_with(&[FUKUOKA, &broken, SUMATRA, CHILE_NO_MAG]);

    let stats = convert_file(&input, &output, &ConverterConfig::default())
        .await
        .unwrap();

    assert_eq!(stats.records_parsed, 3);
    assert_eq!(stats.lines_failed, 1);
    assert_eq!(stats.errors.len(), 1);
    assert!(stats.errors[0].starts_with("Line 2:"));

    let rows = read_rows(&output);
    assert_eq!(rows.len(), 4);
    assert!(rows[2].ends_with("SUMATRA"));
    assert!(rows[3].ends_with("CENTRAL CHILE"));
}

#[tokio::test]
async fn test_comments_and_blanks_only() {
    let (_dir, input, output) = catalog_with(&["# nothing here", "", "   ", "# still nothing"]);

    let stats = convert_file(&input, &output, &ConverterConfig::default())
        .await
        .unwrap();

    assert_eq!(stats.records_parsed, 0);
    assert_eq!(stats.lines_failed, 0);
    assert_eq!(read_rows(&output), vec!["date,time,lat,lon,dep,Mjma,location"]);
}

#[tokio::test]
async fn test_trailing_whitespace_does_not_change_values() {
    let padded = format!("{}      ", FUKUOKA);
    let (_dir, input, output) = catalog_with(&[&padded]);

    convert_file(&input, &output, &ConverterConfig::default())
        .await
        .unwrap();

    assert_eq!(
        read_rows(&output)[1],
        "2025-05-03,09:47:10.2,33.7200,130.1967,5,0.2,福岡県北西沖"
    );
}

#[tokio::test]
async fn test_unreadable_input_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("catalog.csv");

    let result = convert_file(
        &temp_dir.path().join("missing.txt"),
        &output,
        &ConverterConfig::default(),
    )
    .await;

    assert!(matches!(result, Err(CatalogError::ReadInput { .. })));
    assert!(!output.exists());
}

#[tokio::test]
async fn test_unwritable_output_is_fatal() {
    let (dir, input, _) = catalog_with(&[FUKUOKA]);
    // A directory cannot be written as a file
    let output = dir.path().to_path_buf();

    let result = convert_file(&input, &output, &ConverterConfig::default()).await;
    assert!(matches!(result, Err(CatalogError::WriteOutput { .. })));
}

#[tokio::test]
async fn test_convert_path_without_writing() {
    let (_dir, input, output) = catalog_with(&[FUKUOKA, "bad line"]);

    let result = CatalogConverter::new(&ConverterConfig::default())
        .convert_path(&input)
        .await
        .unwrap();

    assert_eq!(result.records.len(), 1);
    assert_eq!(result.stats.lines_failed, 1);
    assert!(!output.exists());
}
