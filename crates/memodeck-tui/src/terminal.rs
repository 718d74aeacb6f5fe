//! Terminal driver for the presenter.
//!
//! Implements the [`Driver`] trait for terminal I/O using crossterm for
//! keyboard and mouse events and ratatui for rendering. Mouse coordinates are
//! resolved to targets against the hitmap of the last rendered frame.

use std::{
    io::{self, Stdout, stdout},
    time::{Duration, Instant},
};

use crossterm::{
    ExecutableCommand,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent,
        KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use memodeck_app::{App, AppEvent, Driver, KeyInput};
use ratatui::{Terminal, backend::CrosstermBackend};
use thiserror::Error;

use crate::ui::{self, Hitmap};

/// Terminal driver errors.
#[derive(Debug, Error)]
pub enum TerminalError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The terminal event stream ended.
    #[error("terminal input closed")]
    InputClosed,
}

/// Terminal driver implementing the [`Driver`] trait.
///
/// Owns raw mode, the alternate screen and mouse capture for its lifetime;
/// all three are restored on [`Driver::stop`] or drop.
pub struct TerminalDriver {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_stream: EventStream,
    hitmap: Hitmap,
    wheel_step: f64,
    restored: bool,
}

impl TerminalDriver {
    /// Take over the terminal.
    ///
    /// `wheel_step` is the wheel delta reported per horizontal scroll notch.
    pub fn new(wheel_step: f64) -> Result<Self, TerminalError> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?.execute(EnableMouseCapture)?;

        let backend = CrosstermBackend::new(stdout());
        let terminal = Terminal::new(backend)?;
        let event_stream = EventStream::new();

        Ok(Self { terminal, event_stream, hitmap: Hitmap::new(), wheel_step, restored: false })
    }

    /// Convert a crossterm key press to `KeyInput`.
    ///
    /// Control chords other than Ctrl+S are dropped so they never reach a
    /// text field as plain characters.
    fn convert_key(event: KeyEvent) -> Option<KeyInput> {
        if event.modifiers.contains(KeyModifiers::CONTROL) {
            return match event.code {
                KeyCode::Char('s' | 'S') => Some(KeyInput::Save),
                _ => None,
            };
        }

        match event.code {
            KeyCode::Char(c) => Some(KeyInput::Char(c)),
            KeyCode::Enter => Some(KeyInput::Enter),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Tab => Some(KeyInput::Tab),
            KeyCode::Esc => Some(KeyInput::Esc),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            _ => None,
        }
    }

    /// Convert a crossterm mouse event to a pointer or wheel event.
    ///
    /// The left button plays the role of touch. Horizontal scrolling (or
    /// Shift + vertical scrolling) reports `wheel_step` per notch.
    fn convert_mouse(event: MouseEvent, hitmap: &Hitmap, wheel_step: f64) -> Option<AppEvent> {
        let (x, y) = (event.column, event.row);
        let target = hitmap.resolve(x, y);
        let shift = event.modifiers.contains(KeyModifiers::SHIFT);

        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => Some(AppEvent::PointerDown { x, y, target }),
            MouseEventKind::Up(MouseButton::Left) => Some(AppEvent::PointerUp { x, y, target }),
            MouseEventKind::ScrollRight => Some(AppEvent::Wheel { delta_x: wheel_step, target }),
            MouseEventKind::ScrollLeft => Some(AppEvent::Wheel { delta_x: -wheel_step, target }),
            MouseEventKind::ScrollDown if shift => {
                Some(AppEvent::Wheel { delta_x: wheel_step, target })
            },
            MouseEventKind::ScrollUp if shift => {
                Some(AppEvent::Wheel { delta_x: -wheel_step, target })
            },
            _ => None,
        }
    }

    fn convert_event(&self, event: Event) -> Option<AppEvent> {
        match event {
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                Self::convert_key(key_event).map(AppEvent::Key)
            },
            Event::Mouse(mouse) => Self::convert_mouse(mouse, &self.hitmap, self.wheel_step),
            Event::Resize(cols, rows) => Some(AppEvent::Resize(cols, rows)),
            _ => None,
        }
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        let _ = disable_raw_mode();
        let _ = stdout().execute(DisableMouseCapture);
        let _ = stdout().execute(LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

impl Driver for TerminalDriver {
    type Error = TerminalError;
    type Instant = Instant;

    async fn poll_event(&mut self, timeout: Duration) -> Result<Option<AppEvent>, Self::Error> {
        tokio::select! {
            biased;

            // Terminal events
            maybe_event = self.event_stream.next() => {
                match maybe_event {
                    Some(Ok(event)) => Ok(self.convert_event(event)),
                    Some(Err(e)) => Err(TerminalError::Io(e)),
                    None => Err(TerminalError::InputClosed),
                }
            }

            // Next timer deadline
            () = tokio::time::sleep(timeout) => Ok(None),
        }
    }

    fn now(&self) -> Self::Instant {
        Instant::now()
    }

    fn render(&mut self, app: &App) -> Result<(), Self::Error> {
        let mut hitmap = Hitmap::new();
        self.terminal.draw(|frame| {
            hitmap = ui::render(frame, app);
        })?;
        self.hitmap = hitmap;
        Ok(())
    }

    fn stop(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalDriver {
    fn drop(&mut self) {
        self.restore();
    }
}
