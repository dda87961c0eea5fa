//! concurrent_record.rs
//! Two integer slots, each behind its own reader/writer lock.
//!
//! - Readers of a slot never block each other; a writer excludes only the
//!   readers and writers of its own slot.
//! - Every path that holds both locks goes through `lock_both_*`, which always
//!   takes slot 0 before slot 1 (no circular wait).
//! - There is no cross-slot transaction: a snapshot may pair two values written by
//!   different writers that were never current at the same instant.

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub const SLOT_COUNT: usize = 2;

/// Returned by `get` for an index outside `0..SLOT_COUNT`.
pub const INVALID_SLOT: i64 = -1;

#[derive(Debug, Default)]
pub struct ConcurrentRecord {
    slots: [RwLock<i64>; SLOT_COUNT],
}

impl ConcurrentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared-mode read of one slot. Out-of-range index yields `INVALID_SLOT`.
    #[inline]
    pub fn get(&self, index: usize) -> i64 {
        match self.slots.get(index) {
            Some(slot) => *slot.read(),
            None => INVALID_SLOT,
        }
    }

    /// Exclusive-mode write of one slot. Out-of-range index is a no-op.
    #[inline]
    pub fn set(&self, index: usize, value: i64) {
        if let Some(slot) = self.slots.get(index) {
            *slot.write() = value;
        }
    }

    /// Composite read formatted as `"<v0> <v1>"`.
    pub fn snapshot(&self) -> String {
        let (first, second) = self.snapshot_values();
        format!("{} {}", first, second)
    }

    /// Composite read with both shared locks held together.
    pub fn snapshot_values(&self) -> (i64, i64) {
        let (first, second) = self.lock_both_shared();
        (*first, *second)
    }

    /// Bulk write of both slots under both exclusive locks.
    pub fn set_both(&self, first_value: i64, second_value: i64) {
        let (mut first, mut second) = self.lock_both_exclusive();
        *first = first_value;
        *second = second_value;
    }

    // Lock order: slot 0, then slot 1.
    fn lock_both_shared(&self) -> (RwLockReadGuard<'_, i64>, RwLockReadGuard<'_, i64>) {
        let first = self.slots[0].read();
        let second = self.slots[1].read();
        (first, second)
    }

    // Lock order: slot 0, then slot 1.
    fn lock_both_exclusive(&self) -> (RwLockWriteGuard<'_, i64>, RwLockWriteGuard<'_, i64>) {
        let first = self.slots[0].write();
        let second = self.slots[1].write();
        (first, second)
    }
}
