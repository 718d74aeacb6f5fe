//! Classified user intents.
//!
//! The dispatcher turns raw [`crate::AppEvent`]s into [`Command`]s; the App
//! executes them. Keeping the two steps apart lets every classification rule
//! be tested without a live UI.

use crate::KeyInput;

/// A user intent produced by input classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Advance to the following slide.
    Next,
    /// Go back to the preceding slide.
    Prev,
    /// Append an empty slide and start editing it.
    AddSlide,
    /// Delete the current slide.
    DeleteSlide,
    /// Start the stopwatch.
    StartStopwatch,
    /// Stop the stopwatch.
    StopStopwatch,
    /// Start the stopwatch if stopped, stop it if running.
    ToggleStopwatch,
    /// Stop and zero the stopwatch.
    ResetStopwatch,
    /// Enter or leave edit mode.
    ToggleEdit,
    /// Open the import modal.
    OpenImport,
    /// Replace the deck with the import buffer and close the modal.
    ConfirmImport,
    /// Discard the import buffer and close the modal.
    CancelImport,
    /// Key typed into the slide editor.
    EditorInput(KeyInput),
    /// Key typed into the import buffer.
    ImportInput(KeyInput),
    /// Quit the application.
    Quit,
}
