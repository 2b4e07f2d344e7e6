//! # Ring Buffer Implementation
//!
//! A fixed-size circular buffer of `i32` slots with a read cursor and a
//! write cursor.
//!
//! ## Plain English
//!
//! Picture a circular track with numbered parking spots and two attendants.
//! The "write" attendant parks each new car in the next spot; the "read"
//! attendant drives cars out in the order they arrived. The write attendant
//! refuses a car when the next spot is the one the read attendant is
//! standing at, so one spot is always left empty. That single empty spot is
//! how we tell a full lot from an empty one using only the two positions.
//!
//! Spots that were already driven out (or never used) still show whatever
//! was parked there last. Those are "garbage": they have a value, but it is
//! not part of what the next reads will return.

use crate::config::MIN_CAPACITY;
use crate::error::{RingError, RingResult};

/// Structured description of one slot, for renderers.
///
/// This is everything needed to draw the buffer without reaching into its
/// private state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotView {
    /// Position of the slot in storage
    pub index: usize,
    /// Last value written to this slot (zero if never written)
    pub value: i32,
    /// The next read takes this slot
    pub is_read_cursor: bool,
    /// The next write lands in this slot
    pub is_write_cursor: bool,
    /// The value is not part of the live range
    pub is_garbage: bool,
}

/// A fixed-capacity FIFO ring buffer of integers.
///
/// ## Properties
/// - Fixed capacity (doesn't grow), chosen at creation, at least 2
/// - Holds at most `capacity - 1` values
/// - O(1) write and read
/// - Rejects writes when full and reads when empty (never overwrites)
/// - Vacated slots keep their old value until overwritten
///
/// Dropping the buffer releases its storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RingBuffer {
    /// Slot storage, length fixed at creation
    slots: Box<[i32]>,

    /// Slot where the next write lands
    write_index: usize,

    /// Slot where the next read is taken from
    read_index: usize,
}

impl RingBuffer {
    /// Creates a new ring buffer with `capacity` zeroed slots.
    ///
    /// Fails with [`RingError::InvalidCapacity`] when `capacity < 2`.
    ///
    /// ## Example
    /// ```
    /// # use slot_ring::RingBuffer;
    /// let buffer = RingBuffer::new(5).unwrap();
    /// assert_eq!(buffer.capacity(), 5);
    /// assert!(buffer.is_empty());
    /// ```
    pub fn new(capacity: usize) -> RingResult<Self> {
        if capacity < MIN_CAPACITY {
            return Err(RingError::InvalidCapacity { capacity });
        }

        log::debug!(
            "Creating ring buffer: {} slots ({} usable)",
            capacity,
            capacity - 1
        );

        Ok(Self {
            slots: vec![0; capacity].into_boxed_slice(),
            write_index: 0,
            read_index: 0,
        })
    }

    /// Position one step after `index`, wrapping at the end of storage.
    #[inline]
    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.slots.len()
    }

    /// Returns true if the next write would be rejected.
    pub fn is_full(&self) -> bool {
        self.advance(self.write_index) == self.read_index
    }

    /// Returns true if the next read would be rejected.
    pub fn is_empty(&self) -> bool {
        self.read_index == self.write_index
    }

    /// Writes `value` if there is room.
    ///
    /// Returns `false` and leaves everything untouched when the buffer is
    /// full.
    pub fn write(&mut self, value: i32) -> bool {
        if self.is_full() {
            log::trace!("write of {} rejected: buffer full", value);
            return false;
        }

        self.slots[self.write_index] = value;
        self.write_index = self.advance(self.write_index);
        true
    }

    /// Reads the oldest unread value.
    ///
    /// Returns `None` and leaves everything untouched when the buffer is
    /// empty. The slot that was read keeps its value.
    pub fn read(&mut self) -> Option<i32> {
        if self.is_empty() {
            log::trace!("read rejected: buffer empty");
            return None;
        }

        let value = self.slots[self.read_index];
        self.read_index = self.advance(self.read_index);
        Some(value)
    }

    /// Returns true if slot `index` holds stale data.
    ///
    /// ## Rules
    /// - Empty buffer: every slot is garbage
    /// - Full buffer: no slot is garbage
    /// - Otherwise: garbage iff outside `[read_index, write_index)`, taken
    ///   circularly
    pub fn is_garbage(&self, index: usize) -> RingResult<bool> {
        self.check_index(index)?;
        Ok(self.classify(index))
    }

    /// Garbage test for an index already known to be in range.
    fn classify(&self, index: usize) -> bool {
        if self.is_empty() {
            return true;
        }
        if self.is_full() {
            return false;
        }

        if self.read_index <= self.write_index {
            index < self.read_index || index >= self.write_index
        } else {
            // Wrapped: the only dead stretch is [write_index, read_index)
            index < self.read_index && index >= self.write_index
        }
    }

    fn check_index(&self, index: usize) -> RingResult<()> {
        if index >= self.slots.len() {
            return Err(RingError::IndexOutOfRange {
                index,
                capacity: self.slots.len(),
            });
        }
        Ok(())
    }

    /// Discards every unread value by moving the read cursor onto the write
    /// cursor. Slot contents are left as they are.
    pub fn clear(&mut self) {
        self.read_index = self.write_index;
    }

    /// Returns the number of slots (one more than can be filled).
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns how many values fit at once.
    pub fn usable_capacity(&self) -> usize {
        self.slots.len() - 1
    }

    /// Returns the number of unread values.
    pub fn len(&self) -> usize {
        let capacity = self.slots.len();
        (self.write_index + capacity - self.read_index) % capacity
    }

    /// Returns the slot the next read is taken from.
    pub fn read_index(&self) -> usize {
        self.read_index
    }

    /// Returns the slot the next write lands in.
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    /// Returns the raw value stored in slot `index`, live or not.
    pub fn slot(&self, index: usize) -> RingResult<i32> {
        self.check_index(index)?;
        Ok(self.slots[index])
    }

    /// Returns the raw slot storage in index order.
    pub fn slots(&self) -> &[i32] {
        &self.slots
    }

    /// Returns the value the next read would return, without consuming it.
    pub fn peek(&self) -> Option<i32> {
        if self.is_empty() {
            None
        } else {
            Some(self.slots[self.read_index])
        }
    }

    /// Returns an iterator over the unread values (oldest to newest).
    pub fn live(&self) -> impl Iterator<Item = i32> + '_ {
        let capacity = self.slots.len();
        (0..self.len()).map(move |offset| self.slots[(self.read_index + offset) % capacity])
    }

    /// Describes every slot in index order.
    pub fn slot_views(&self) -> Vec<SlotView> {
        self.slots
            .iter()
            .enumerate()
            .map(|(index, &value)| SlotView {
                index,
                value,
                is_read_cursor: index == self.read_index,
                is_write_cursor: index == self.write_index,
                is_garbage: self.classify(index),
            })
            .collect()
    }
}

// ============================================
// TESTS
// ============================================
