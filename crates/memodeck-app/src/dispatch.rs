//! Input classification.
//!
//! The [`Dispatcher`] is the state machine that turns raw pointer, wheel and
//! keyboard events into [`Command`]s. It owns the only input state that spans
//! events: the gesture start recorded on pointer-down and the pending wheel
//! debounce.
//!
//! # Rules
//!
//! - A release travelling more than the swipe threshold horizontally is a
//!   swipe: `start_x - end_x > 0` goes forward, otherwise back.
//! - Any other release is a tap, classified by the target recorded at
//!   pointer-down. The release position is never re-resolved.
//! - Wheel events over the editor pass through; others feed a trailing
//!   debounce and only the last event of a burst navigates.
//! - Keys go to the focused text field when there is one, so typing is
//!   never read as navigation.

use std::time::Duration;

use crate::{Command, Control, Debounce, Focus, KeyInput, ModalPart, PresenterConfig, Target};

/// Gesture start captured on pointer-down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Gesture {
    start_x: u16,
    target: Target,
}

/// Event classifier.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    swipe_threshold: u16,
    wheel_threshold: f64,
    gesture: Option<Gesture>,
    wheel: Debounce<f64>,
}

impl Dispatcher {
    /// Create a dispatcher with the given thresholds.
    pub fn new(config: &PresenterConfig) -> Self {
        Self {
            swipe_threshold: config.swipe_threshold,
            wheel_threshold: config.wheel_threshold,
            gesture: None,
            wheel: Debounce::new(config.wheel_debounce),
        }
    }

    /// Record the start of a gesture.
    pub fn pointer_down(&mut self, x: u16, target: Target) {
        self.gesture = Some(Gesture { start_x: x, target });
    }

    /// Classify the end of a gesture.
    ///
    /// A release without a recorded press is treated as a tap on `target`.
    pub fn pointer_up(&mut self, x: u16, target: Target, focus: Focus) -> Option<Command> {
        let gesture = self.gesture.take().unwrap_or(Gesture { start_x: x, target });
        let dx = i32::from(gesture.start_x) - i32::from(x);

        if dx.unsigned_abs() > u32::from(self.swipe_threshold) {
            let allowed = Self::swipe_allowed(gesture.target, focus);
            tracing::debug!(dx, target = ?gesture.target, allowed, "swipe");
            return if allowed { self.classify_swipe(dx) } else { None };
        }

        let command = Self::classify_tap(gesture.target, focus);
        tracing::debug!(dx, target = ?gesture.target, ?command, "tap");
        command
    }

    /// Direction of a horizontal displacement beyond the swipe threshold.
    ///
    /// `dx` is `start_x - end_x`. Returns `None` at or below the threshold.
    pub fn classify_swipe(&self, dx: i32) -> Option<Command> {
        if dx.unsigned_abs() <= u32::from(self.swipe_threshold) {
            return None;
        }
        Some(if dx > 0 { Command::Next } else { Command::Prev })
    }

    /// Command for a tap that started on `target`.
    pub fn classify_tap(target: Target, focus: Focus) -> Option<Command> {
        match target {
            Target::Page => (focus != Focus::ImportBuffer).then_some(Command::Next),
            Target::Editor => None,
            Target::Control(control) => Self::control_command(control),
            Target::Modal(part) => match part {
                ModalPart::Confirm => Some(Command::ConfirmImport),
                ModalPart::Cancel => Some(Command::CancelImport),
                ModalPart::Panel | ModalPart::Buffer => None,
            },
            Target::Backdrop => Some(Command::CancelImport),
        }
    }

    fn control_command(control: Control) -> Option<Command> {
        match control {
            Control::StartStopwatch => Some(Command::StartStopwatch),
            Control::StopStopwatch => Some(Command::StopStopwatch),
            Control::ResetStopwatch => Some(Command::ResetStopwatch),
            Control::AddSlide => Some(Command::AddSlide),
            Control::DeleteSlide => Some(Command::DeleteSlide),
            Control::EditToggle => Some(Command::ToggleEdit),
            Control::Import => Some(Command::OpenImport),
            Control::StopwatchDisplay | Control::PageCounter | Control::Toolbar => None,
        }
    }

    fn swipe_allowed(start: Target, focus: Focus) -> bool {
        match focus {
            Focus::ImportBuffer => false,
            Focus::Editor => start != Target::Editor,
            Focus::Page => true,
        }
    }

    /// Feed a wheel event. Navigation, if any, comes out of [`Self::poll`].
    pub fn wheel(&mut self, delta_x: f64, target: Target, focus: Focus, now: Duration) {
        if target == Target::Editor || focus == Focus::ImportBuffer {
            return;
        }
        self.wheel.schedule(now, delta_x);
    }

    /// Fire the debounced wheel event if its quiet period has elapsed.
    pub fn poll(&mut self, now: Duration) -> Option<Command> {
        let delta_x = self.wheel.poll(now)?;
        let command = if delta_x > self.wheel_threshold {
            Some(Command::Next)
        } else if delta_x < -self.wheel_threshold {
            Some(Command::Prev)
        } else {
            None
        };
        tracing::debug!(delta_x, ?command, "wheel");
        command
    }

    /// Deadline of the pending wheel event, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        self.wheel.due()
    }

    /// Drop any pending wheel event.
    pub fn cancel_pending(&mut self) {
        self.wheel.cancel();
    }

    /// Classify a key press.
    pub fn key(&self, key: KeyInput, focus: Focus) -> Option<Command> {
        match focus {
            Focus::ImportBuffer => Some(match key {
                KeyInput::Esc => Command::CancelImport,
                KeyInput::Save => Command::ConfirmImport,
                other => Command::ImportInput(other),
            }),
            Focus::Editor => Some(match key {
                KeyInput::Esc | KeyInput::Save => Command::ToggleEdit,
                other => Command::EditorInput(other),
            }),
            Focus::Page => match key {
                KeyInput::Right | KeyInput::Char(' ') => Some(Command::Next),
                KeyInput::Left => Some(Command::Prev),
                KeyInput::Char('e') | KeyInput::Enter => Some(Command::ToggleEdit),
                KeyInput::Char('i') => Some(Command::OpenImport),
                KeyInput::Char('a') => Some(Command::AddSlide),
                KeyInput::Char('d') => Some(Command::DeleteSlide),
                KeyInput::Char('s') => Some(Command::ToggleStopwatch),
                KeyInput::Char('r') => Some(Command::ResetStopwatch),
                KeyInput::Char('q') | KeyInput::Esc => Some(Command::Quit),
                _ => None,
            },
        }
    }
}
