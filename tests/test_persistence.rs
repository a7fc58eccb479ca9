//! Save-then-load round trips through the file-backed repository.

use address_book::{AddressBook, BookRepository, FileBookRepository, Record, StorageError};
use std::fs;

fn sample_book(contacts: usize, phones_per_contact: usize) -> AddressBook {
    let mut book = AddressBook::new();
    for c in 0..contacts {
        let mut record = Record::new(format!("contact{}", c)).unwrap();
        for p in 0..phones_per_contact {
            record
                .add_phone(&format!("{:05}{:05}", c, p))
                .unwrap();
        }
        if c % 2 == 0 {
            record
                .add_birthday(&format!("{:02}.{:02}.19{:02}", c % 28 + 1, c % 12 + 1, c % 100))
                .unwrap();
        }
        book.add_record(record);
    }
    book
}

#[test]
fn test_round_trip_preserves_names_phones_and_birthdays() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileBookRepository::new(dir.path().join("addressbook.bin"));

    for (contacts, phones) in [(0, 0), (1, 1), (5, 3), (20, 0)] {
        let book = sample_book(contacts, phones);
        repo.save(&book).unwrap();
        let loaded = repo.load().unwrap();

        assert_eq!(loaded.len(), contacts);
        for original in book.records() {
            let restored = loaded
                .find(original.name().as_str())
                .expect("record should survive a round trip");
            assert_eq!(restored.phones(), original.phones());
            assert_eq!(restored.birthday(), original.birthday());
        }
    }
}

#[test]
fn test_round_trip_keeps_duplicate_phones_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileBookRepository::new(dir.path().join("addressbook.bin"));

    let mut record = Record::new("alice").unwrap();
    for phone in ["2222222222", "1111111111", "2222222222"] {
        record.add_phone(phone).unwrap();
    }
    let mut book = AddressBook::new();
    book.add_record(record);

    repo.save(&book).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(
        loaded.find("alice").unwrap().phones_line(),
        "2222222222; 1111111111; 2222222222"
    );
}

#[test]
fn test_save_overwrites_previous_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileBookRepository::new(dir.path().join("addressbook.bin"));

    repo.save(&sample_book(5, 2)).unwrap();
    repo.save(&sample_book(1, 1)).unwrap();

    assert_eq!(repo.load().unwrap().len(), 1);
}

#[test]
fn test_missing_file_loads_empty_book() {
    let dir = tempfile::tempdir().unwrap();
    let repo = FileBookRepository::new(dir.path().join("never-saved.bin"));

    assert!(repo.load().unwrap().is_empty());
    assert!(!repo.path().exists());
}

#[test]
fn test_truncated_file_fails_to_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("addressbook.bin");
    let repo = FileBookRepository::new(&path);

    repo.save(&sample_book(3, 2)).unwrap();
    let bytes = fs::read(&path).unwrap();
    fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();

    match repo.load() {
        Err(StorageError::Decode { path: failed, .. }) => assert_eq!(failed, path),
        other => panic!("Expected a decode error, got {:?}", other),
    }
}
