//! Identifier generation collaborator.

use std::sync::atomic::{AtomicU64, Ordering};

/// Hands out item identifiers. Each value must be returned at most once,
/// including under concurrent callers.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> u64;
}

/// Process-wide counter backed by an atomic increment.
#[derive(Debug, Default)]
pub struct SequenceIdGenerator {
    next: AtomicU64,
}

impl SequenceIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Starts the sequence at `first`, e.g. one past the highest stored id.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl IdGenerator for SequenceIdGenerator {
    fn next_id(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
