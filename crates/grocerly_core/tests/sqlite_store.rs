use grocerly_core::store::migrations::{apply_migrations, latest_version};
use grocerly_core::{open_store, open_store_in_memory, KeyValueStore, StoreError};
use rusqlite::Connection;

#[test]
fn set_get_remove_round_trip() {
    let mut store = open_store_in_memory().unwrap();

    assert_eq!(store.get("grocery_items").unwrap(), None);

    store.set("grocery_items", "[]").unwrap();
    assert_eq!(store.get("grocery_items").unwrap().as_deref(), Some("[]"));

    store.remove("grocery_items").unwrap();
    assert_eq!(store.get("grocery_items").unwrap(), None);
}

#[test]
fn set_replaces_an_existing_slot() {
    let mut store = open_store_in_memory().unwrap();

    store.set("slot", "first").unwrap();
    store.set("slot", "second").unwrap();

    assert_eq!(store.get("slot").unwrap().as_deref(), Some("second"));
}

#[test]
fn removing_an_absent_slot_is_not_an_error() {
    let mut store = open_store_in_memory().unwrap();
    store.remove("never_written").unwrap();
}

#[test]
fn slots_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");

    {
        let mut store = open_store(&path).unwrap();
        store.set("grocery_items", r#"[{"id":"x","value":"y"}]"#).unwrap();
    }

    let store = open_store(&path).unwrap();
    assert_eq!(
        store.get("grocery_items").unwrap().as_deref(),
        Some(r#"[{"id":"x","value":"y"}]"#)
    );
}

#[test]
fn open_rejects_a_newer_schema_version() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("slots.db");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    }

    let result = open_store(&path);
    match result {
        Err(StoreError::UnsupportedSchemaVersion {
            db_version: 99,
            latest_supported,
        }) => assert_eq!(latest_supported, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected unsupported schema version error"),
    }
}

#[test]
fn migrations_are_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();

    apply_migrations(&mut conn).unwrap();
    apply_migrations(&mut conn).unwrap();

    let version = conn
        .query_row("PRAGMA user_version;", [], |row| row.get::<_, u32>(0))
        .unwrap();
    assert_eq!(version, latest_version());
    assert!(latest_version() > 0);
}
