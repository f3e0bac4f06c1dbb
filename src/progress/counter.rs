//! Shared completed/total accounting across download workers.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Run-wide download progress, shared by every worker.
///
/// The counter replaces a lock around `completed`: [`record`] returns the
/// post-increment value, so each worker can emit its `completed/total` line
/// with a count no concurrent worker observes or logs twice.
///
/// [`record`]: ProgressCounter::record
#[derive(Debug)]
pub struct ProgressCounter {
    completed: AtomicUsize,
    total: usize,
}

impl ProgressCounter {
    /// Creates a counter for a run of `total` resources, starting at zero.
    pub fn new(total: usize) -> Self {
        Self {
            completed: AtomicUsize::new(0),
            total,
        }
    }

    /// Records one successful download and returns the new completed count.
    pub fn record(&self) -> usize {
        self.completed.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Returns the number of successful downloads recorded so far.
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }

    /// Returns the total number of resources in the run.
    pub fn total(&self) -> usize {
        self.total
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_starts_at_zero() {
        let counter = ProgressCounter::new(7);
        assert_eq!(counter.completed(), 0);
        assert_eq!(counter.total(), 7);
    }

    #[test]
    fn test_record_returns_new_count() {
        let counter = ProgressCounter::new(2);
        assert_eq!(counter.record(), 1);
        assert_eq!(counter.record(), 2);
        assert_eq!(counter.completed(), 2);
    }

    #[test]
    fn test_concurrent_records_are_unique() {
        let counter = Arc::new(ProgressCounter::new(100));
        let mut handles = Vec::new();
        for _ in 0..4 {
            let counter = counter.clone();
            handles.push(std::thread::spawn(move || {
                (0..25).map(|_| counter.record()).collect::<Vec<_>>()
            }));
        }
        let mut seen: Vec<usize> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=100).collect::<Vec<_>>());
    }
}
