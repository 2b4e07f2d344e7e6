//! # Slot Ring
//!
//! A fixed-capacity ring buffer of integers with bounded FIFO writes and
//! reads, plus the introspection needed to draw it: where the cursors are and
//! which slots hold stale ("garbage") values.
//!
//! ## Architecture Overview
//!
//! - `buffer`: The ring buffer core and a thread-safe wrapper
//! - `render`: Text rendering of the buffer state
//! - `config`: Application configuration
//! - `error`: Error types
//!
//! ## Quick Start
//!
//! ```
//! use slot_ring::RingBuffer;
//!
//! let mut buffer = RingBuffer::new(5)?;
//! buffer.write(1);
//! buffer.write(2);
//! assert_eq!(buffer.read(), Some(1));
//! assert_eq!(buffer.to_string(), "[1, r2, w0, 0, 0]");
//! # Ok::<(), slot_ring::RingError>(())
//! ```

// ============================================
// MODULE DECLARATIONS
// ============================================

pub mod buffer;
pub mod config;
pub mod error;
pub mod render;

// ============================================
// RE-EXPORTS
// ============================================

pub use buffer::{RingBuffer, RingStats, SharedRingBuffer, SlotView};
pub use config::Config;
pub use error::{RingError, RingResult};
pub use render::{render_state, Style};

use log::LevelFilter;

// ============================================
// LOGGING
// ============================================

/// Initialize logging at the default `Info` level.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_logging() {
    init_logging_with(LevelFilter::Info);
}

/// Initialize logging with an explicit maximum level.
///
/// `RUST_LOG` still overrides the level when set.
pub fn init_logging_with(level: LevelFilter) {
    let _ = env_logger::builder()
        .filter_level(level)
        .parse_default_env()
        .try_init();
}

// ============================================
// TESTS
// ============================================
