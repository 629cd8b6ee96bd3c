//! Lookup adapters resolving planned production documents.

mod in_memory;

pub use in_memory::{InMemoryPlannedProductionLookup, SnapshotSeedError};
