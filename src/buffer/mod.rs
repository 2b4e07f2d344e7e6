//! # Buffer Module
//!
//! This module provides the circular (ring) buffer and a thread-safe wrapper
//! around it.
//!
//! ## Plain English Explanation
//!
//! Imagine a circular conveyor belt with a fixed number of spots:
//! 1. New values go on the belt at the next free spot
//! 2. If the belt is full, new values are turned away (nothing is dropped)
//! 3. Values come off the belt in the order they went on
//!
//! `RingBuffer` is the belt itself. `SharedRingBuffer` puts a lock on it so
//! a producer thread and a consumer thread can both use it.

mod ring_buffer;

pub use ring_buffer::{RingBuffer, SlotView};

use parking_lot::{Mutex, RwLock};

use crate::config::Config;
use crate::error::{RingError, RingResult};

// ============================================
// STATISTICS
// ============================================

/// Counters for calls made through a `SharedRingBuffer`
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RingStats {
    /// Writes that stored a value
    pub writes: u64,
    /// Reads that returned a value
    pub reads: u64,
    /// Writes turned away because the buffer was full
    pub rejected_writes: u64,
    /// Reads turned away because the buffer was empty
    pub rejected_reads: u64,
}

// ============================================
// SHARED RING BUFFER
// Thread-safe wrapper for our ring buffer
// ============================================

/// A thread-safe ring buffer that can be shared across threads
///
/// ## Plain English Explanation
///
/// A producer WRITES values, a consumer READS them, and anyone may look at
/// how full it is. The read-write lock lets many lookers in at once, but
/// only one writer or reader at a time, because reading moves the read
/// cursor.
///
/// The full/empty check and the cursor move happen under the same lock, so
/// two threads can never both squeeze into the last free slot.
pub struct SharedRingBuffer {
    /// The actual ring buffer, protected by a read-write lock
    inner: RwLock<RingBuffer>,

    /// Operation counters
    stats: Mutex<RingStats>,
}

impl SharedRingBuffer {
    /// Creates a new shared buffer with `capacity` slots
    pub fn new(capacity: usize) -> RingResult<Self> {
        let buffer = RingBuffer::new(capacity)?;

        log::info!(
            "Creating shared ring buffer: {} slots, {} usable",
            capacity,
            buffer.usable_capacity()
        );

        Ok(Self {
            inner: RwLock::new(buffer),
            stats: Mutex::new(RingStats::default()),
        })
    }

    /// Creates a shared buffer sized by `config`
    ///
    /// The configuration is validated first; the first problem found is
    /// returned.
    pub fn from_config(config: &Config) -> RingResult<Self> {
        if let Some(err) = config.validate().into_iter().next() {
            return Err(RingError::Config(err));
        }
        Self::new(config.capacity)
    }

    /// Writes a value, returning `false` if the buffer is full
    pub fn write(&self, value: i32) -> bool {
        let accepted = self.inner.write().write(value);

        let mut stats = self.stats.lock();
        if accepted {
            stats.writes += 1;
        } else {
            stats.rejected_writes += 1;
            log::debug!(
                "Shared buffer full, rejected write ({} so far)",
                stats.rejected_writes
            );
        }
        accepted
    }

    /// Reads the oldest value, or `None` if the buffer is empty
    pub fn read(&self) -> Option<i32> {
        let value = self.inner.write().read();

        let mut stats = self.stats.lock();
        match value {
            Some(_) => stats.reads += 1,
            None => stats.rejected_reads += 1,
        }
        value
    }

    /// Returns true if the next write would be rejected
    pub fn is_full(&self) -> bool {
        self.inner.read().is_full()
    }

    /// Returns true if the next read would be rejected
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Returns the number of unread values
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// Returns the number of slots
    pub fn capacity(&self) -> usize {
        self.inner.read().capacity()
    }

    /// Returns how full the buffer is (0.0 = empty, 1.0 = full)
    ///
    /// Measured against the usable capacity, so a full buffer reports 1.0
    /// even though one slot is always free.
    pub fn fill_ratio(&self) -> f32 {
        let buffer = self.inner.read();
        buffer.len() as f32 / buffer.usable_capacity() as f32
    }

    /// Takes a copy of the whole buffer, cursors included
    ///
    /// Useful for rendering without holding the lock.
    pub fn snapshot(&self) -> RingBuffer {
        self.inner.read().clone()
    }

    /// Discards all unread values
    pub fn clear(&self) {
        self.inner.write().clear();
    }

    /// Returns a copy of the current statistics
    pub fn stats(&self) -> RingStats {
        self.stats.lock().clone()
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_shared_creation() {
        let buffer = SharedRingBuffer::new(8).unwrap();
        assert_eq!(buffer.capacity(), 8);
        assert!(buffer.is_empty());
        assert_eq!(buffer.fill_ratio(), 0.0);
        assert_eq!(buffer.stats(), RingStats::default());
    }

    #[test]
    fn test_shared_invalid_capacity() {
        assert!(matches!(
            SharedRingBuffer::new(1),
            Err(RingError::InvalidCapacity { capacity: 1 })
        ));
    }

    #[test]
    fn test_from_config() {
        let buffer = SharedRingBuffer::from_config(&Config::tiny()).unwrap();
        assert_eq!(buffer.capacity(), 2);

        let mut config = Config::default();
        config.capacity = 0;
        assert!(matches!(
            SharedRingBuffer::from_config(&config),
            Err(RingError::Config(_))
        ));
    }

    #[test]
    fn test_stats_count_rejections() {
        let buffer = SharedRingBuffer::new(3).unwrap();

        assert_eq!(buffer.read(), None);
        assert!(buffer.write(1));
        assert!(buffer.write(2));
        assert!(!buffer.write(3));
        assert!(buffer.is_full());
        assert!((buffer.fill_ratio() - 1.0).abs() < 0.01);
        assert_eq!(buffer.read(), Some(1));

        let stats = buffer.stats();
        assert_eq!(stats.writes, 2);
        assert_eq!(stats.reads, 1);
        assert_eq!(stats.rejected_writes, 1);
        assert_eq!(stats.rejected_reads, 1);
    }

    #[test]
    fn test_snapshot_and_clear() {
        let buffer = SharedRingBuffer::new(4).unwrap();
        buffer.write(5);
        buffer.write(6);

        let snapshot = buffer.snapshot();
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.live().collect::<Vec<_>>(), vec![5, 6]);
    }

    #[test]
    fn test_producer_consumer_threads() {
        const COUNT: i32 = 10_000;
        let buffer = Arc::new(SharedRingBuffer::new(16).unwrap());

        let producer = {
            let buffer = Arc::clone(&buffer);
            thread::spawn(move || {
                for value in 0..COUNT {
                    while !buffer.write(value) {
                        thread::yield_now();
                    }
                }
            })
        };

        let mut received = Vec::with_capacity(COUNT as usize);
        while received.len() < COUNT as usize {
            match buffer.read() {
                Some(value) => received.push(value),
                None => thread::yield_now(),
            }
        }
        producer.join().unwrap();

        assert_eq!(received, (0..COUNT).collect::<Vec<_>>());
        assert!(buffer.is_empty());
        assert_eq!(buffer.stats().writes, COUNT as u64);
        assert_eq!(buffer.stats().reads, COUNT as u64);
    }
}
