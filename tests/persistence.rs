//! Address book sessions over a file-backed store.

use address_book::book::AddressBook;
use address_book::core::{Action, ContactStatus};
use address_book::storage::{FileStore, KeyValueStore, LoadError, STORAGE_KEY};
use address_book::validation::{Field, ValidationSchema};

fn create_contact(book: &mut AddressBook<FileStore>, name: &str, email: &str, phone: &str) {
    book.begin_create().unwrap();
    let mut draft = book.open_draft().unwrap();
    draft.set_field(Field::Name, name);
    draft.set_field(Field::Email, email);
    draft.set_field(Field::Phone, phone);
    let actions = draft.save(ValidationSchema::contact()).unwrap();
    book.apply(actions).unwrap();
}

#[test]
fn contacts_survive_reopening() {
    let dir = tempfile::tempdir().unwrap();

    {
        let mut book = AddressBook::open(FileStore::new(dir.path()), STORAGE_KEY).unwrap();
        create_contact(&mut book, "Amy Pond", "amy@example.com", "+44 20 7946 0000");
        create_contact(&mut book, "Bob", "bob@example.com", "555-0100");
        book.dispatch(Action::DeleteContact(2)).unwrap();
    }

    let book = AddressBook::open(FileStore::new(dir.path()), STORAGE_KEY).unwrap();
    let names: Vec<&str> = book
        .state()
        .contacts
        .iter()
        .map(|c| c.name.as_str())
        .collect();

    assert_eq!(names, vec!["Bob"]);
    assert_eq!(book.state().contacts[0].id, 3);
    assert_eq!(book.state().filters.status, ContactStatus::Work);
    assert_eq!(book.state().selected, None);
}

#[test]
fn stored_file_is_plain_contact_array() {
    let dir = tempfile::tempdir().unwrap();
    let mut book = AddressBook::open(FileStore::new(dir.path()), STORAGE_KEY).unwrap();

    create_contact(&mut book, "Amy", "amy@example.com", "123");

    let raw = std::fs::read_to_string(dir.path().join("AddressBook.json")).unwrap();
    assert_eq!(
        raw,
        r#"[{"id":2,"status":"Work","name":"Amy","email":"amy@example.com","phone":"123"}]"#
    );
}

#[test]
fn malformed_file_is_reported_then_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = FileStore::new(dir.path());
    store.write(STORAGE_KEY, "[{\"id\": \"one\"}]").unwrap();

    let strict = AddressBook::open(store.clone(), STORAGE_KEY);
    assert!(matches!(strict, Err(LoadError::Malformed { .. })));

    let mut book = AddressBook::open_or_default(store, STORAGE_KEY);
    assert!(book.state().contacts.is_empty());

    create_contact(&mut book, "Amy", "amy@example.com", "123");

    let reopened = AddressBook::open(FileStore::new(dir.path()), STORAGE_KEY).unwrap();
    assert_eq!(reopened.state().contacts.len(), 1);
}

#[test]
fn separate_keys_hold_separate_books() {
    let dir = tempfile::tempdir().unwrap();

    let mut work = AddressBook::open(FileStore::new(dir.path()), "Work").unwrap();
    create_contact(&mut work, "Amy", "amy@example.com", "123");

    let other = AddressBook::open(FileStore::new(dir.path()), "Other").unwrap();
    assert!(other.state().contacts.is_empty());
    assert_eq!(other.storage_key(), "Other");
}
