// tests/validation.rs
//
// Pre-upload file validation: extension, regular-file, empty, size cap.
// Nothing here touches the network — rejection happens before any request.
//
use std::fs;

use sav_inspect::file::{format_file_size, validate_sav};

const CAP: u64 = 64; // tiny cap so tests don't write megabytes

#[test]
fn accepts_a_small_sav_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.sav");
    fs::write(&path, b"$FL2 not really").unwrap();

    let info = validate_sav(&path, CAP).unwrap();
    assert_eq!(info.name, "survey.sav");
    assert_eq!(info.size, 15);
}

#[test]
fn extension_check_is_case_insensitive() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("SURVEY.SAV");
    fs::write(&path, b"x").unwrap();

    assert!(validate_sav(&path, CAP).is_ok());
}

#[test]
fn rejects_wrong_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey.csv");
    fs::write(&path, b"a,b,c").unwrap();

    let err = validate_sav(&path, CAP).unwrap_err();
    assert!(err.to_string().contains("Not a .sav file"));
}

#[test]
fn rejects_missing_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("survey");
    fs::write(&path, b"x").unwrap();

    assert!(validate_sav(&path, CAP).is_err());
}

#[test]
fn rejects_empty_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.sav");
    fs::write(&path, b"").unwrap();

    let err = validate_sav(&path, CAP).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn rejects_file_over_the_size_cap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("big.sav");
    fs::write(&path, vec![0u8; CAP as usize + 1]).unwrap();

    let err = validate_sav(&path, CAP).unwrap_err();
    assert!(err.to_string().contains("too large"));
}

#[test]
fn rejects_nonexistent_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ghost.sav");

    assert!(validate_sav(&path, CAP).is_err());
}

#[test]
fn rejects_directory_named_like_a_sav() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("folder.sav");
    fs::create_dir(&path).unwrap();

    let err = validate_sav(&path, CAP).unwrap_err();
    assert!(err.to_string().contains("regular file"));
}

#[test]
fn file_sizes_format_like_the_upload_panel_shows_them() {
    assert_eq!(format_file_size(0), "0 Bytes");
    assert_eq!(format_file_size(1), "1 Bytes");
    assert_eq!(format_file_size(512), "512 Bytes");
    assert_eq!(format_file_size(1024), "1 KB");
    assert_eq!(format_file_size(1536), "1.5 KB");
    assert_eq!(format_file_size(1024 * 1024), "1 MB");
    assert_eq!(format_file_size(5 * 1024 * 1024 + 250 * 1024), "5.24 MB");
    assert_eq!(format_file_size(3 * 1024 * 1024 * 1024), "3 GB");
}
