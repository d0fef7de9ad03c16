use std::fs;

use findref_dist::packager::{create_zip, generate_checksums};
use tempfile::tempdir;

#[test]
fn test_create_zip_archive() {
    let src_dir = tempdir().unwrap();
    let out_dir = tempdir().unwrap();

    let binary = src_dir.path().join("findref");
    fs::write(&binary, b"binary content").unwrap();

    let archive = out_dir.path().join("findref.zip");
    create_zip(&binary, &archive).unwrap();

    assert!(archive.exists());

    // Verify the archive is not empty and is a zip (PK magic)
    let bytes = fs::read(&archive).unwrap();
    assert!(bytes.len() > 0);
    assert_eq!(&bytes[..2], b"PK");
}

#[test]
fn test_create_zip_for_windows_binary() {
    let src_dir = tempdir().unwrap();

    let binary = src_dir.path().join("findref.exe");
    fs::write(&binary, b"MZ not really").unwrap();

    let archive = src_dir.path().join("findref.zip");
    create_zip(&binary, &archive).unwrap();

    assert!(archive.exists());
}

#[test]
fn test_create_zip_missing_binary_fails() {
    let dir = tempdir().unwrap();

    let binary = dir.path().join("findref");
    let archive = dir.path().join("findref.zip");

    assert!(create_zip(&binary, &archive).is_err());
}

#[test]
fn test_generate_checksums() {
    let temp_dir = tempdir().unwrap();

    let file1 = temp_dir.path().join("findref.zip");
    let file2 = temp_dir.path().join("findref-1.0.0-1.x86_64.rpm");
    fs::write(&file1, b"test content 1").unwrap();
    fs::write(&file2, b"test content 2").unwrap();

    let files = vec![file1, file2];

    let checksum_path = generate_checksums(&files, temp_dir.path()).unwrap();

    assert!(checksum_path.exists());
    assert_eq!(checksum_path.file_name().unwrap(), "SHA256SUMS");

    let content = fs::read_to_string(&checksum_path).unwrap();
    assert!(content.contains("findref.zip"));
    assert!(content.contains("findref-1.0.0-1.x86_64.rpm"));

    // Each line should have a hash and filename
    for line in content.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        assert_eq!(parts.len(), 2);
        assert_eq!(parts[0].len(), 64); // SHA256 hash is 64 hex characters
    }
}

#[test]
fn test_checksum_format() {
    let temp_dir = tempdir().unwrap();

    // Create a test file with known content
    let file1 = temp_dir.path().join("test.txt");
    fs::write(&file1, b"Hello, World!").unwrap();

    let files = vec![file1];
    let checksum_path = generate_checksums(&files, temp_dir.path()).unwrap();

    let content = fs::read_to_string(&checksum_path).unwrap();

    // The SHA256 hash of "Hello, World!" should be consistent
    assert!(content.contains("dffd6021bb2bd5b0af676290809ec3a53191dd81c7f70a4b28688a362182986f"));
    assert!(content.contains("test.txt"));
}
