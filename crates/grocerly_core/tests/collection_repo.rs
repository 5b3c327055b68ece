use grocerly_core::{
    open_store_in_memory, CollectionRepository, Item, KeyValueStore, KvCollectionRepository,
    MemoryStore, RepoError, COLLECTION_KEY,
};
use uuid::Uuid;

fn memory_repo() -> KvCollectionRepository<MemoryStore> {
    KvCollectionRepository::new(MemoryStore::new())
}

#[test]
fn load_of_absent_slot_is_an_empty_collection() {
    let repo = memory_repo();
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn save_then_load_preserves_items_and_order() {
    let mut repo = memory_repo();
    let items = vec![
        Item::new("Milk").unwrap(),
        Item::new("Eggs").unwrap(),
        Item::new("Bread").unwrap(),
    ];

    repo.save(&items).unwrap();
    let loaded = repo.load().unwrap();

    assert_eq!(loaded, items);
}

#[test]
fn save_replaces_the_whole_collection() {
    let mut repo = memory_repo();
    repo.save(&[Item::new("Milk").unwrap()]).unwrap();

    let replacement = vec![Item::new("Eggs").unwrap()];
    repo.save(&replacement).unwrap();

    assert_eq!(repo.load().unwrap(), replacement);
}

#[test]
fn clear_removes_the_slot_key_itself() {
    let mut repo = memory_repo();
    repo.save(&[Item::new("Milk").unwrap()]).unwrap();

    repo.clear().unwrap();

    assert_eq!(repo.store().get(COLLECTION_KEY).unwrap(), None);
    assert!(repo.store().is_empty());
    assert!(repo.load().unwrap().is_empty());
}

#[test]
fn save_rejects_a_blank_record() {
    let mut repo = memory_repo();
    let invalid = Item {
        id: Uuid::new_v4(),
        value: "  ".to_string(),
    };

    let err = repo.save(&[invalid]).unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn save_rejects_duplicate_ids() {
    let mut repo = memory_repo();
    let item = Item::new("Milk").unwrap();
    let twin = Item {
        id: item.id,
        value: "Eggs".to_string(),
    };

    let err = repo.save(&[item, twin]).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn load_rejects_a_malformed_blob() {
    let mut store = MemoryStore::new();
    store.set(COLLECTION_KEY, "not an item array").unwrap();
    let repo = KvCollectionRepository::new(store);

    let err = repo.load().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn load_rejects_a_blank_persisted_record() {
    let blob = format!(r#"[{{"id":"{}","value":"   "}}]"#, Uuid::new_v4());
    let mut store = MemoryStore::new();
    store.set(COLLECTION_KEY, &blob).unwrap();
    let repo = KvCollectionRepository::new(store);

    let err = repo.load().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn load_rejects_duplicate_persisted_ids() {
    let id = Uuid::new_v4();
    let blob = format!(r#"[{{"id":"{id}","value":"Milk"}},{{"id":"{id}","value":"Eggs"}}]"#);
    let mut store = MemoryStore::new();
    store.set(COLLECTION_KEY, &blob).unwrap();
    let repo = KvCollectionRepository::new(store);

    let err = repo.load().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn custom_slot_key_is_honored() {
    let mut repo = KvCollectionRepository::with_key(MemoryStore::new(), "pantry_items");
    repo.save(&[Item::new("Flour").unwrap()]).unwrap();

    assert!(repo.store().get("pantry_items").unwrap().is_some());
    assert_eq!(repo.store().get(COLLECTION_KEY).unwrap(), None);
}

#[test]
fn repository_works_over_the_sqlite_backend() {
    let store = open_store_in_memory().unwrap();
    let mut repo = KvCollectionRepository::new(store);
    let items = vec![Item::new("Milk").unwrap(), Item::new("Eggs").unwrap()];

    repo.save(&items).unwrap();
    assert_eq!(repo.load().unwrap(), items);

    repo.clear().unwrap();
    assert_eq!(repo.store().get(COLLECTION_KEY).unwrap(), None);
}
