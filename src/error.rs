//! # Error Types Module
//!
//! This module defines the error types used throughout Slot Ring.
//!
//! ## Plain English Explanation
//!
//! Only two things can genuinely go wrong with a ring buffer:
//!
//! - "InvalidCapacity: You asked for a buffer too small to ever hold anything"
//! - "IndexOutOfRange: You asked about a slot that doesn't exist"
//!
//! A full buffer refusing a write, or an empty buffer refusing a read, is
//! NOT an error. That is normal backpressure and is reported through the
//! return value (`false` / `None`) instead.

use thiserror::Error;

use crate::config::ConfigError;

// ============================================
// MAIN ERROR
// ============================================

/// The main error type for Slot Ring
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RingError {
    /// The requested capacity cannot tell "empty" apart from "full"
    ///
    /// ## What This Means
    /// One slot is always kept free, so a buffer needs at least two slots
    /// to hold a single value.
    #[error("capacity {capacity} is too small (a ring buffer needs at least 2 slots)")]
    InvalidCapacity {
        /// The rejected capacity
        capacity: usize,
    },

    /// A slot index outside `0..capacity` was supplied
    #[error("slot index {index} is out of range for capacity {capacity}")]
    IndexOutOfRange {
        /// The rejected index
        index: usize,
        /// Capacity of the buffer that was queried
        capacity: usize,
    },

    /// Something went wrong with configuration
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

// ============================================
// RESULT TYPE ALIAS
// ============================================

/// A Result type that uses RingError
pub type RingResult<T> = Result<T, RingError>;

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = RingError::InvalidCapacity { capacity: 1 };
        let message = err.to_string();
        assert!(message.contains("capacity 1"));
        assert!(message.contains("at least 2"));

        let err = RingError::IndexOutOfRange { index: 7, capacity: 5 };
        assert_eq!(
            err.to_string(),
            "slot index 7 is out of range for capacity 5"
        );
    }

    #[test]
    fn test_config_error_conversion() {
        let err: RingError = ConfigError::CapacityTooSmall(0).into();

        match err {
            RingError::Config(ConfigError::CapacityTooSmall(0)) => {} // Expected
            other => panic!("Expected Config error variant, got {:?}", other),
        }
    }
}
