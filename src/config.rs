//! # Configuration Module
//!
//! This module handles the configurable settings for Slot Ring.
//!
//! ## Plain English Explanation
//!
//! The buffer itself only needs one number (how many slots), but the things
//! around it want a few more settings:
//! - How many slots to allocate
//! - The largest buffer we are willing to allocate
//! - Whether the state dump should use terminal colors
//! - How chatty the logs should be

use log::LevelFilter;

/// Slots allocated by default. Four usable, one sacrificed.
pub const DEFAULT_CAPACITY: usize = 5;

/// Smallest capacity that can tell "empty" from "full".
pub const MIN_CAPACITY: usize = 2;

/// Default ceiling for `Config::capacity`.
pub const DEFAULT_MAX_CAPACITY: usize = 1 << 20;

// ============================================
// MAIN CONFIGURATION
// ============================================

/// All configuration options for Slot Ring
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    // ----------------------------------------
    // BUFFER SETTINGS
    // ----------------------------------------
    /// Number of slots to allocate
    ///
    /// ## Plain English
    /// A buffer with 5 slots holds at most 4 values. The last slot is
    /// always kept free so that "full" and "empty" look different.
    ///
    /// ## Limits
    /// - Minimum: 2
    /// - Maximum: `max_capacity`
    pub capacity: usize,

    /// Upper bound accepted by `validate`
    pub max_capacity: usize,

    // ----------------------------------------
    // OUTPUT SETTINGS
    // ----------------------------------------
    /// Render the state dump with ANSI colors
    pub color: bool,

    /// Maximum log level installed by `init_logging_with`
    pub log_level: LevelFilter,
}

impl Config {
    /// Creates a configuration with all default values
    pub fn new() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            max_capacity: DEFAULT_MAX_CAPACITY,
            color: true,
            log_level: LevelFilter::Info,
        }
    }

    /// The smallest useful buffer: one usable slot
    ///
    /// ## When to Use
    /// Handy for watching the full/empty transitions happen on every call.
    pub fn tiny() -> Self {
        Self {
            capacity: MIN_CAPACITY,
            ..Self::new()
        }
    }

    /// A larger buffer for actual producer/consumer use, without colors
    pub fn roomy() -> Self {
        Self {
            capacity: 1024,
            color: false,
            log_level: LevelFilter::Warn,
            ..Self::new()
        }
    }

    /// Validates the configuration and returns errors if invalid
    ///
    /// Returns a list of problems, or empty if all is well.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.capacity < MIN_CAPACITY {
            errors.push(ConfigError::CapacityTooSmall(self.capacity));
        }
        if self.capacity > self.max_capacity {
            errors.push(ConfigError::CapacityTooLarge {
                capacity: self.capacity,
                max: self.max_capacity,
            });
        }

        errors
    }

    /// Number of values the configured buffer can hold at once
    pub fn usable_capacity(&self) -> usize {
        self.capacity.saturating_sub(1)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================
// CONFIGURATION ERRORS
// ============================================

/// Errors that can occur with configuration values
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Capacity below two slots
    CapacityTooSmall(usize),

    /// Capacity above the configured ceiling
    CapacityTooLarge { capacity: usize, max: usize },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::CapacityTooSmall(val) => {
                write!(f, "Capacity {} is too small (minimum {})", val, MIN_CAPACITY)
            }
            Self::CapacityTooLarge { capacity, max } => {
                write!(f, "Capacity {} exceeds the maximum of {}", capacity, max)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.capacity, 5);
        assert_eq!(config.usable_capacity(), 4);
        assert!(config.color);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_presets_are_valid() {
        assert!(Config::tiny().validate().is_empty());
        assert!(Config::roomy().validate().is_empty());
        assert_eq!(Config::tiny().usable_capacity(), 1);
    }

    #[test]
    fn test_validation_errors() {
        let mut config = Config::default();

        config.capacity = 1;
        assert_eq!(config.validate(), vec![ConfigError::CapacityTooSmall(1)]);

        config.capacity = 0;
        assert_eq!(config.usable_capacity(), 0);
        assert!(!config.validate().is_empty());

        config.capacity = 10;
        config.max_capacity = 8;
        assert_eq!(
            config.validate(),
            vec![ConfigError::CapacityTooLarge { capacity: 10, max: 8 }]
        );
    }

    #[test]
    fn test_error_display() {
        let message = ConfigError::CapacityTooSmall(1).to_string();
        assert!(message.contains("too small"));
        assert!(message.contains("minimum 2"));
    }
}
