//! Repository layer over slot storage.
//!
//! # Responsibility
//! - Define the collection access contract the session layer depends on.
//! - Keep the wire codec (JSON array of item records) out of session logic.
//!
//! # Invariants
//! - Repository writes validate every record before persistence.
//! - Repository reads reject invalid persisted state instead of masking it.

pub mod list_repo;
