use std::sync::atomic::{AtomicU64, Ordering};

pub type SerialNumber = u64;

/// Hands out strictly increasing account serial numbers, starting at 1.
///
/// The counter is passed explicitly to `Account::open`, so creation order
/// stays under the caller's control. The fetch-add keeps serials unique even
/// if accounts are ever opened from multiple tasks.
#[derive(Debug, Default)]
pub struct SerialCounter {
    next: AtomicU64,
}

impl SerialCounter {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    pub fn next(&self) -> SerialNumber {
        self.next.fetch_add(1, Ordering::Relaxed)
    }
}
