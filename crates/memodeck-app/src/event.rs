//! Application input events.
//!
//! This module defines [`AppEvent`], the set of inputs that drive the
//! [`crate::App`] state machine. Pointer events cover mouse and touch alike:
//! a press is the gesture start, a release is the gesture end and the click.

use std::time::Duration;

use crate::{KeyInput, Target};

/// Events processed by the App state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Keyboard input.
    Key(KeyInput),

    /// Pointer pressed (touch start).
    PointerDown {
        /// Horizontal position in device units.
        x: u16,
        /// Vertical position in device units.
        y: u16,
        /// Region under the pointer.
        target: Target,
    },

    /// Pointer released (touch end / click).
    PointerUp {
        /// Horizontal position in device units.
        x: u16,
        /// Vertical position in device units.
        y: u16,
        /// Region under the pointer.
        target: Target,
    },

    /// Horizontal wheel or trackpad scroll.
    Wheel {
        /// Horizontal delta. Positive scrolls right.
        delta_x: f64,
        /// Region under the pointer.
        target: Target,
    },

    /// Clock update. Fires due stopwatch ticks and debounced actions.
    Tick {
        /// Time since session start.
        now: Duration,
    },

    /// Terminal resize (columns, rows).
    Resize(u16, u16),
}
