use super::*;
use api::session::{REFRESH_TOKEN_KEY, TOKEN_KEY};
use api::{Session, SessionStore, TokenStore};

fn storage_in(dir: &tempfile::TempDir) -> FileStorage {
    FileStorage::new(dir.path().join("nested").join("session.json"))
}

#[test]
fn missing_file_reads_as_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    assert!(storage.get_item(TOKEN_KEY).is_none());
}

#[test]
fn set_item_creates_file_with_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);

    storage.set_item(TOKEN_KEY, "T1");

    assert!(storage.path().exists());
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T1"));
}

#[test]
fn separate_handles_share_the_file() {
    let dir = tempfile::tempdir().unwrap();
    storage_in(&dir).set_item(TOKEN_KEY, "T1");

    assert_eq!(storage_in(&dir).get_item(TOKEN_KEY).as_deref(), Some("T1"));
}

#[test]
fn removing_last_key_deletes_file() {
    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set_item(TOKEN_KEY, "T1");

    storage.remove_item(TOKEN_KEY);

    assert!(!storage.path().exists());
}

#[test]
fn corrupt_file_reads_as_empty_and_is_replaced() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    fs::write(&path, "not json").unwrap();
    let storage = FileStorage::new(&path);

    assert!(storage.get_item(TOKEN_KEY).is_none());
    storage.set_item(TOKEN_KEY, "T2");
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("T2"));
}

#[test]
fn token_store_round_trips_through_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = TokenStore::new(storage_in(&dir));

    store.set(&Session::new("T1", Some("R1".to_owned())));
    assert_eq!(store.storage().get_item(REFRESH_TOKEN_KEY).as_deref(), Some("R1"));

    store.clear();
    assert!(store.get().is_none());
    assert!(!store.storage().path().exists());
}

#[cfg(unix)]
#[test]
fn session_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let storage = storage_in(&dir);
    storage.set_item(TOKEN_KEY, "T1");

    let mode = fs::metadata(storage.path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
