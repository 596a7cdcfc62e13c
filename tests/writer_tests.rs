//! Tests for the database writer
//!
//! These tests verify:
//! - Header layout (magic + zeroed reserved field)
//! - Record framing (tag + payload + newline)
//! - Byte and record accounting
//! - Flush/sync behavior of finish()
//! - Truncation of pre-existing files

use std::path::PathBuf;
use tempfile::TempDir;
use threatdb::db::{DbWriter, RecordKind, HEADER_SIZE, MAGIC};

// =============================================================================
// Helper Functions
// =============================================================================

fn setup_temp_db() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("test.bin");
    (temp_dir, path)
}

// =============================================================================
// Header Tests
// =============================================================================

#[test]
fn test_empty_db_is_header_only() {
    let (_temp, path) = setup_temp_db();

    let writer = DbWriter::create(&path).unwrap();
    let summary = writer.finish().unwrap();

    assert_eq!(summary.file_size, HEADER_SIZE);
    assert_eq!(summary.bytes_written, HEADER_SIZE);
    assert_eq!(summary.record_count, 0);

    let data = std::fs::read(&path).unwrap();
    assert_eq!(data.len(), 25);
    assert_eq!(&data[..17], MAGIC);
    // Reserved field stays zero regardless of content
    assert_eq!(&data[17..25], &[0u8; 8]);
}

#[test]
fn test_header_written_before_records() {
    let (_temp, path) = setup_temp_db();

    let mut writer = DbWriter::create(&path).unwrap();
    writer.append(RecordKind::Phone, b"4412345678").unwrap();
    writer.finish().unwrap();

    let data = std::fs::read(&path).unwrap();
    assert_eq!(&data[..17], b"DFS_THREAT_DB_V1\x00");
    assert_eq!(&data[25..31], b"PHONE:");
}

#[test]
fn test_fresh_writer_accounts_header() {
    let (_temp, path) = setup_temp_db();

    let writer = DbWriter::create(&path).unwrap();

    assert_eq!(writer.bytes_written(), HEADER_SIZE);
    assert_eq!(writer.record_count(), 0);
}

// =============================================================================
// Record Framing Tests
// =============================================================================

#[test]
fn test_append_frames_record() {
    let (_temp, path) = setup_temp_db();

    let mut writer = DbWriter::create(&path).unwrap();
    let len = writer.append(RecordKind::Domain, b"paypal42.tk").unwrap();
    writer.finish().unwrap();

    // "DOMAIN:" (7) + payload (11) + "\n" (1)
    assert_eq!(len, 19);

    let data = std::fs::read(&path).unwrap();
    assert_eq!(&data[25..], b"DOMAIN:paypal42.tk\n");
}

#[test]
fn test_record_tags() {
    assert_eq!(RecordKind::Phone.tag(), b"PHONE:");
    assert_eq!(RecordKind::Domain.tag(), b"DOMAIN:");
    assert_eq!(RecordKind::Signature.tag(), b"SIG:");
    assert_eq!(RecordKind::Metadata.tag(), b"META:");
}

#[test]
fn test_record_len_includes_tag_and_newline() {
    assert_eq!(RecordKind::Phone.record_len(10), 17);
    assert_eq!(RecordKind::Signature.record_len(16), 21);
    assert_eq!(RecordKind::Metadata.record_len(4090), 4096);
    assert_eq!(RecordKind::Domain.record_len(0), 8);
}

#[test]
fn test_signature_record_is_21_bytes() {
    let (_temp, path) = setup_temp_db();

    let mut writer = DbWriter::create(&path).unwrap();
    let len = writer.append(RecordKind::Signature, &[0xAB; 16]).unwrap();
    let summary = writer.finish().unwrap();

    assert_eq!(len, 21);
    assert_eq!(summary.file_size, HEADER_SIZE + 21);
}

#[test]
fn test_binary_payload_written_verbatim() {
    let (_temp, path) = setup_temp_db();

    // Payloads are opaque: embedded newlines and tag-like bytes pass through
    let payload = b"\n\x00META:\xFF";

    let mut writer = DbWriter::create(&path).unwrap();
    writer.append(RecordKind::Metadata, payload).unwrap();
    writer.finish().unwrap();

    let data = std::fs::read(&path).unwrap();
    assert_eq!(&data[25..30], b"META:");
    assert_eq!(&data[30..38], payload);
    assert_eq!(data[38], b'\n');
}

// =============================================================================
// Accounting Tests
// =============================================================================

#[test]
fn test_counters_track_appends() {
    let (_temp, path) = setup_temp_db();

    let mut writer = DbWriter::create(&path).unwrap();
    let mut expected = HEADER_SIZE;

    for i in 0..100u64 {
        let payload = format!("55512{:05}", i);
        expected += writer.append(RecordKind::Phone, payload.as_bytes()).unwrap();
        assert_eq!(writer.bytes_written(), expected);
        assert_eq!(writer.record_count(), i + 1);
    }
}

#[test]
fn test_finish_size_matches_accounting() {
    let (_temp, path) = setup_temp_db();

    let mut writer = DbWriter::create(&path).unwrap();
    for _ in 0..500 {
        writer.append(RecordKind::Signature, &[0x5A; 16]).unwrap();
    }
    let summary = writer.finish().unwrap();

    assert_eq!(summary.bytes_written, summary.file_size);
    assert_eq!(summary.record_count, 500);
    assert_eq!(summary.file_size, std::fs::metadata(&summary.path).unwrap().len());
}

// =============================================================================
// File Handling Tests
// =============================================================================

#[test]
fn test_create_truncates_existing_file() {
    let (_temp, path) = setup_temp_db();

    // First build: a few KB of records
    let mut writer = DbWriter::create(&path).unwrap();
    for _ in 0..200 {
        writer.append(RecordKind::Domain, b"secure-login99.xyz").unwrap();
    }
    let first = writer.finish().unwrap();

    // Second build: header only, must not keep old bytes
    let writer = DbWriter::create(&path).unwrap();
    let second = writer.finish().unwrap();

    assert!(first.file_size > second.file_size);
    assert_eq!(second.file_size, HEADER_SIZE);
}

#[test]
fn test_create_fails_without_parent_dir() {
    let (_temp, path) = setup_temp_db();
    let nested = path.join("missing/db.bin");

    // The writer itself never creates directories
    let result = DbWriter::create(&nested);
    assert!(result.is_err());
}
