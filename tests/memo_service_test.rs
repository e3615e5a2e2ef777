//! Tests for MemoService: add, list, delete and renumbering

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rstest::rstest;
use tempfile::TempDir;

use memo::application::services::{MemoService, NoteStore};
use memo::application::ApplicationError;
use memo::domain::DomainError;
use memo::infrastructure::traits::{Clock, FileSystem, RealFileSystem};
use memo::util::testing;

/// Clock that advances one minute per call, starting at 2024-03-01 09:00:00
struct SteppingClock {
    next: Mutex<NaiveDateTime>,
}

impl SteppingClock {
    fn new() -> Self {
        let start = NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Self {
            next: Mutex::new(start),
        }
    }
}

impl Clock for SteppingClock {
    fn now(&self) -> NaiveDateTime {
        let mut next = self.next.lock().unwrap();
        let now = *next;
        *next = now + Duration::minutes(1);
        now
    }
}

/// Filesystem that serves reads from disk but refuses every write
struct ReadOnlyFileSystem;

impl FileSystem for ReadOnlyFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        fs::read_to_string(path)
    }

    fn write(&self, _path: &Path, _content: &str) -> io::Result<()> {
        Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"))
    }

    fn create_dir_all(&self, _path: &Path) -> io::Result<()> {
        Ok(())
    }
}

fn service_with(fs: Arc<dyn FileSystem>, path: PathBuf) -> MemoService {
    testing::init_test_setup();
    MemoService::new(NoteStore::new(fs, path), Arc::new(SteppingClock::new()))
}

fn setup(temp: &TempDir) -> (MemoService, PathBuf) {
    let path = temp.path().join("data.json");
    (service_with(Arc::new(RealFileSystem), path.clone()), path)
}

fn texts_and_ids(service: &MemoService) -> Vec<(usize, String)> {
    service
        .list()
        .unwrap()
        .into_iter()
        .map(|n| (n.id, n.text))
        .collect()
}

// ============================================================
// add() tests
// ============================================================

#[test]
fn given_empty_store_when_add_then_note_has_id_one() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);

    // Act
    let note = service.add("buy milk").unwrap();

    // Assert
    assert_eq!(note.id, 1);
    assert_eq!(note.text, "buy milk");
    assert_eq!(note.time, "2024-03-01 09:00:00");
    assert!(path.exists(), "first add creates the store");
}

#[test]
fn given_several_adds_when_list_then_ids_follow_add_order() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, _) = setup(&temp);

    // Act
    for text in ["one", "two", "three", "four"] {
        service.add(text).unwrap();
    }

    // Assert
    assert_eq!(
        texts_and_ids(&service),
        vec![
            (1, "one".to_string()),
            (2, "two".to_string()),
            (3, "three".to_string()),
            (4, "four".to_string()),
        ]
    );
}

#[test]
fn given_empty_text_when_add_then_stores_empty_note() {
    let temp = TempDir::new().unwrap();
    let (service, _) = setup(&temp);

    let note = service.add("").unwrap();

    assert_eq!(note.id, 1);
    assert_eq!(service.list().unwrap().notes()[0].text, "");
}

#[test]
fn given_unwritable_store_when_add_then_returns_io_error() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let service = service_with(Arc::new(ReadOnlyFileSystem), temp.path().join("data.json"));

    // Act
    let result = service.add("buy milk");

    // Assert
    assert!(matches!(result, Err(ApplicationError::Io { .. })));
}

#[test]
fn given_malformed_store_when_add_then_returns_parse_error_and_keeps_file() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);
    fs::write(&path, "not json").unwrap();

    // Act
    let result = service.add("buy milk");

    // Assert
    assert!(matches!(result, Err(ApplicationError::Parse { .. })));
    assert_eq!(fs::read_to_string(&path).unwrap(), "not json");
}

// ============================================================
// list() tests
// ============================================================

#[test]
fn given_missing_store_when_list_then_empty_without_error() {
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);

    let notebook = service.list().unwrap();

    assert!(notebook.is_empty());
    assert!(!path.exists());
}

#[test]
fn given_notes_when_list_then_lines_use_display_layout() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, _) = setup(&temp);
    service.add("buy milk").unwrap();
    service.add("call mom").unwrap();

    // Act
    let lines: Vec<String> = service
        .list()
        .unwrap()
        .notes()
        .iter()
        .map(|n| n.to_string())
        .collect();

    // Assert
    assert_eq!(
        lines,
        vec![
            "1: buy milk  2024-03-01 09:00:00".to_string(),
            "2: call mom  2024-03-01 09:01:00".to_string(),
        ]
    );
}

// ============================================================
// delete() tests
// ============================================================

#[test]
fn given_two_notes_when_delete_first_then_second_becomes_one() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, _) = setup(&temp);
    service.add("buy milk").unwrap();
    service.add("call mom").unwrap();

    // Act
    let removed = service.delete("1").unwrap();

    // Assert
    assert_eq!(removed.text, "buy milk");
    let notebook = service.list().unwrap();
    assert_eq!(notebook.len(), 1);
    assert_eq!(notebook.notes()[0].id, 1);
    assert_eq!(notebook.notes()[0].text, "call mom");
    assert_eq!(notebook.notes()[0].time, "2024-03-01 09:01:00");
}

#[rstest]
#[case(1, vec!["b", "c", "d", "e"])]
#[case(3, vec!["a", "b", "d", "e"])]
#[case(5, vec!["a", "b", "c", "d"])]
fn given_five_notes_when_delete_k_then_remaining_are_renumbered(
    #[case] k: usize,
    #[case] expected: Vec<&str>,
) {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, _) = setup(&temp);
    for text in ["a", "b", "c", "d", "e"] {
        service.add(text).unwrap();
    }

    // Act
    service.delete(&k.to_string()).unwrap();

    // Assert
    let expected: Vec<(usize, String)> = expected
        .into_iter()
        .enumerate()
        .map(|(i, t)| (i + 1, t.to_string()))
        .collect();
    assert_eq!(texts_and_ids(&service), expected);
}

#[test]
fn given_last_note_when_delete_then_store_holds_empty_array() {
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);
    service.add("only").unwrap();

    service.delete("1").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "[]");
    assert!(service.list().unwrap().is_empty());
}

#[rstest]
#[case("abc")]
#[case("")]
#[case("0")]
#[case("-1")]
#[case("1.5")]
#[case(" 1")]
fn given_invalid_id_when_delete_then_validation_error_and_file_unchanged(#[case] id: &str) {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);
    service.add("buy milk").unwrap();
    let before = fs::read(&path).unwrap();

    // Act
    let result = service.delete(id);

    // Assert
    match result {
        Err(ApplicationError::Domain(DomainError::InvalidNoteId(raw))) => assert_eq!(raw, id),
        other => panic!("expected invalid id error, got {other:?}"),
    }
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn given_out_of_range_id_when_delete_then_not_found_and_file_unchanged() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);
    service.add("buy milk").unwrap();
    service.add("call mom").unwrap();
    let before = fs::read(&path).unwrap();

    // Act
    let result = service.delete("3");

    // Assert
    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::NoteNotFound { id: 3, count: 2 }))
    ));
    assert_eq!(fs::read(&path).unwrap(), before);
}

#[test]
fn given_missing_store_when_delete_then_not_found_and_no_file_created() {
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);

    let result = service.delete("1");

    assert!(matches!(
        result,
        Err(ApplicationError::Domain(DomainError::NoteNotFound { id: 1, count: 0 }))
    ));
    assert!(!path.exists());
}

// ============================================================
// end-to-end example
// ============================================================

#[test]
fn given_example_sequence_when_applied_then_store_matches() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let (service, path) = setup(&temp);

    // Act
    service.add("buy milk").unwrap();
    service.add("call mom").unwrap();
    service.delete("1").unwrap();

    // Assert
    let stored: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        stored,
        serde_json::json!([
            { "id": 1, "text": "call mom", "time": "2024-03-01 09:01:00" }
        ])
    );
}
