//! Host-agnostic input vocabulary.
//!
//! Decouples application logic from terminal libraries (crossterm, termion,
//! etc.) and from how the host lays out its widgets: the host resolves each
//! pointer event to a [`Target`] and the dispatcher only reasons about those.

/// Keyboard input abstraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character (including space).
    Char(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key (delete character before cursor).
    Backspace,
    /// Delete key (delete character at cursor).
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Left arrow key.
    Left,
    /// Right arrow key.
    Right,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
    /// Home key (cursor to line start).
    Home,
    /// End key (cursor to line end).
    End,
    /// Save/confirm shortcut (Ctrl+S).
    Save,
}

/// Clickable or display-only controls around the slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Stopwatch start button.
    StartStopwatch,
    /// Stopwatch stop button.
    StopStopwatch,
    /// Stopwatch reset button.
    ResetStopwatch,
    /// Elapsed time readout.
    StopwatchDisplay,
    /// "n / total" readout.
    PageCounter,
    /// Append-slide button.
    AddSlide,
    /// Delete-slide button. Only shown with more than one slide.
    DeleteSlide,
    /// Edit mode toggle.
    EditToggle,
    /// Opens the import modal.
    Import,
    /// Background of a button group, including the gaps between buttons.
    Toolbar,
}

/// Regions of the import modal's content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalPart {
    /// Panel chrome (title, borders, padding).
    Panel,
    /// Text buffer.
    Buffer,
    /// Confirm button.
    Confirm,
    /// Cancel button.
    Cancel,
}

/// Region an event was delivered to, resolved once by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Target {
    /// Anywhere outside the other regions.
    Page,
    /// Slide text region, in view and edit mode alike.
    Editor,
    /// A named control.
    Control(Control),
    /// Inside the open import modal's panel.
    Modal(ModalPart),
    /// Outside the panel while the import modal is open.
    Backdrop,
}

/// Which text field owns the keyboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// No text field: keys are navigation and shortcuts.
    Page,
    /// Slide text in edit mode.
    Editor,
    /// Import modal buffer.
    ImportBuffer,
}
