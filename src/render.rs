//! # State Rendering Module
//!
//! Turns a buffer's slot views into a one-line picture.
//!
//! ## Plain English
//!
//! `[r1, 2, 3, w0, 0]` reads as: five slots, the next read comes from the
//! first one (`r`), the next write goes into the fourth one (`w`). With
//! colors on, `r` is green, `w` is red, and stale values are greyed out.
//!
//! Nothing in here touches the buffer's internals; it only uses
//! [`RingBuffer::slot_views`].

use std::fmt;

use colored::Colorize;

use crate::buffer::{RingBuffer, SlotView};
use crate::config::Config;

/// How to draw the state line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Style {
    /// No escape codes
    #[default]
    Plain,
    /// ANSI colors via `colored`
    Colored,
}

impl Style {
    /// Picks the style the configuration asks for
    pub fn from_config(config: &Config) -> Self {
        if config.color {
            Self::Colored
        } else {
            Self::Plain
        }
    }
}

/// Renders every slot of `buffer` in index order.
pub fn render_state(buffer: &RingBuffer, style: Style) -> String {
    render_views(&buffer.slot_views(), style)
}

/// Renders a list of slot views, e.g. from a snapshot taken elsewhere.
pub fn render_views(views: &[SlotView], style: Style) -> String {
    let body = views
        .iter()
        .map(|view| render_slot(view, style))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", body)
}

fn render_slot(view: &SlotView, style: Style) -> String {
    let mut out = String::new();

    match style {
        Style::Plain => {
            if view.is_read_cursor {
                out.push('r');
            }
            if view.is_write_cursor {
                out.push('w');
            }
            out.push_str(&view.value.to_string());
        }
        Style::Colored => {
            if view.is_read_cursor {
                out.push_str(&"r".green().bold().to_string());
            }
            if view.is_write_cursor {
                out.push_str(&"w".red().bold().to_string());
            }
            let value = view.value.to_string();
            if view.is_garbage {
                out.push_str(&value.bright_black().dimmed().to_string());
            } else {
                out.push_str(&value);
            }
        }
    }

    out
}

impl fmt::Display for RingBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render_state(self, Style::Plain))
    }
}

// ============================================
// TESTS
// ============================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_buffer() {
        let buffer = RingBuffer::new(5).unwrap();
        assert_eq!(render_state(&buffer, Style::Plain), "[rw0, 0, 0, 0, 0]");
    }

    #[test]
    fn test_walkthrough_states() {
        let mut buffer = RingBuffer::new(5).unwrap();
        for i in 1..=3 {
            buffer.write(i);
        }
        assert_eq!(buffer.to_string(), "[r1, 2, 3, w0, 0]");

        buffer.read();
        assert_eq!(buffer.to_string(), "[1, r2, 3, w0, 0]");

        while buffer.read().is_some() {}
        assert_eq!(buffer.to_string(), "[1, 2, 3, rw0, 0]");

        let mut next = 4;
        while buffer.write(next) {
            next += 1;
        }
        assert_eq!(buffer.to_string(), "[6, 7, w3, r4, 5]");
    }

    #[test]
    fn test_colored_marks_cursors_and_garbage() {
        colored::control::set_override(true);

        let mut buffer = RingBuffer::new(3).unwrap();
        buffer.write(8);
        let line = render_state(&buffer, Style::Colored);

        assert!(line.starts_with('['));
        assert!(line.ends_with(']'));
        assert!(line.contains("\u{1b}["));
        assert!(line.contains('8'));
        assert_ne!(line, render_state(&buffer, Style::Plain));

        colored::control::unset_override();
    }

    #[test]
    fn test_style_from_config() {
        assert_eq!(Style::from_config(&Config::default()), Style::Colored);
        assert_eq!(Style::from_config(&Config::roomy()), Style::Plain);
    }
}
