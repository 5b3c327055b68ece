//! CLI smoke entry point.
//!
//! # Responsibility
//! - Drive one in-memory list session end to end to verify `grocerly_core`
//!   wiring.
//! - Keep output deterministic for quick local sanity checks.

use grocerly_core::{
    KvCollectionRepository, ListManager, MemoryStore, MemorySurface, NoticeBoard, RepoResult,
};

type ProbeManager = ListManager<KvCollectionRepository<MemoryStore>, MemorySurface, NoticeBoard>;

fn main() -> RepoResult<()> {
    println!("grocerly_core version={}", grocerly_core::core_version());

    let repo = KvCollectionRepository::new(MemoryStore::new());
    let mut manager = ListManager::new(repo, MemorySurface::new(), NoticeBoard::new());

    manager.start()?;
    manager.submit("Milk")?;
    manager.submit("Eggs")?;
    print_rows(&manager, "after add");

    if let Some(id) = manager.items().first().map(|item| item.id) {
        manager.begin_edit(id)?;
        manager.submit("Oat Milk")?;
    }
    print_rows(&manager, "after edit");

    if let Some(id) = manager.items().first().map(|item| item.id) {
        manager.delete(id)?;
    }
    print_rows(&manager, "after delete");

    manager.clear_all()?;
    print_rows(&manager, "after clear");

    Ok(())
}

fn print_rows(manager: &ProbeManager, stage: &str) {
    let labels: Vec<&str> = manager
        .surface()
        .rows()
        .iter()
        .map(|row| row.label.as_str())
        .collect();
    println!("{stage}: control={} rows={labels:?}", manager.surface().control());
}
