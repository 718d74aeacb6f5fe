//! Presenter session state machine.
//!
//! This module defines the [`App`] state machine, which owns every piece of
//! session state (deck, stopwatch, edit mode, import buffer) completely
//! decoupled from I/O.
//!
//! This is a pure state machine: it consumes [`crate::AppEvent`] inputs and
//! produces [`crate::AppAction`] instructions for the runtime to execute.
//! Events are classified into [`Command`]s by the [`Dispatcher`] and then run
//! through [`App::execute`], so every operation is also callable directly.
//!
//! # Invariants
//!
//! - The deck invariants hold after every call (see [`crate::deck`]).
//! - Every call that mutates the deck returns [`AppAction::Persist`].
//! - While edit mode is on the deck's current slide equals the editor text.

use std::time::Duration;

use crate::{
    AppAction, AppEvent, Command, Deck, Dispatcher, Focus, PresenterConfig, Stopwatch,
    editor::TextBuffer,
};

/// Presenter state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable in simulation.
#[derive(Debug, Clone)]
pub struct App {
    /// Slides and cursor.
    deck: Deck,
    /// Elapsed-time counter.
    stopwatch: Stopwatch,
    /// Slide editor. `Some` exactly while edit mode is on.
    editor: Option<TextBuffer>,
    /// Import modal buffer. `Some` while the modal is open.
    import: Option<TextBuffer>,
    /// Input classifier.
    dispatcher: Dispatcher,
    /// Latest clock reading, time since session start.
    now: Duration,
}

impl App {
    /// Create a session over a loaded deck.
    pub fn new(deck: Deck, config: &PresenterConfig) -> Self {
        Self {
            deck,
            stopwatch: Stopwatch::with_period(config.tick_period),
            editor: None,
            import: None,
            dispatcher: Dispatcher::new(config),
            now: Duration::ZERO,
        }
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        let focus = self.focus();
        let command = match event {
            AppEvent::Key(key) => self.dispatcher.key(key, focus),
            AppEvent::PointerDown { x, target, .. } => {
                self.dispatcher.pointer_down(x, target);
                None
            },
            AppEvent::PointerUp { x, target, .. } => self.dispatcher.pointer_up(x, target, focus),
            AppEvent::Wheel { delta_x, target } => {
                self.dispatcher.wheel(delta_x, target, focus, self.now);
                None
            },
            AppEvent::Tick { now } => return self.tick(now),
            AppEvent::Resize(..) => return vec![AppAction::Render],
        };

        command.map_or_else(Vec::new, |command| self.execute(command))
    }

    /// Run a classified command.
    pub fn execute(&mut self, command: Command) -> Vec<AppAction> {
        match command {
            Command::Next => self.next(),
            Command::Prev => self.prev(),
            Command::AddSlide => self.add_slide(),
            Command::DeleteSlide => self.delete_slide(),
            Command::StartStopwatch => self.start_stopwatch(),
            Command::StopStopwatch => self.stop_stopwatch(),
            Command::ToggleStopwatch => {
                if self.stopwatch.is_running() {
                    self.stop_stopwatch()
                } else {
                    self.start_stopwatch()
                }
            },
            Command::ResetStopwatch => self.reset_stopwatch(),
            Command::ToggleEdit => self.toggle_edit(),
            Command::OpenImport => self.open_import(),
            Command::ConfirmImport => self.confirm_import(),
            Command::CancelImport => self.cancel_import(),
            Command::EditorInput(key) => {
                let Some(editor) = self.editor.as_mut() else {
                    return vec![];
                };
                if editor.handle_key(key) {
                    let text = editor.text().to_owned();
                    self.save_current_content(&text)
                } else {
                    vec![AppAction::Render]
                }
            },
            Command::ImportInput(key) => match self.import.as_mut() {
                Some(buffer) => {
                    buffer.handle_key(key);
                    vec![AppAction::Render]
                },
                None => vec![],
            },
            Command::Quit => self.quit(),
        }
    }

    /// Advance the clock: fire due stopwatch ticks and debounced wheel input.
    fn tick(&mut self, now: Duration) -> Vec<AppAction> {
        self.now = self.now.max(now);

        let mut actions = Vec::new();
        if self.stopwatch.advance(self.now) > 0 {
            actions.push(AppAction::Render);
        }
        if let Some(command) = self.dispatcher.poll(self.now) {
            actions.extend(self.execute(command));
        }
        actions
    }

    /// Append an empty slide, move onto it and start editing it.
    pub fn add_slide(&mut self) -> Vec<AppAction> {
        self.commit_edits();
        self.deck.add_slide();
        self.editor = Some(TextBuffer::new());
        tracing::info!(slides = self.deck.slide_count(), "added slide");
        vec![AppAction::Persist, AppAction::Render]
    }

    /// Delete the current slide. No-op when it is the only one.
    pub fn delete_slide(&mut self) -> Vec<AppAction> {
        if !self.deck.delete_slide() {
            return vec![];
        }
        if self.editor.is_some() {
            self.editor = Some(TextBuffer::with_text(self.deck.current().content.clone()));
        }
        tracing::info!(slides = self.deck.slide_count(), "deleted slide");
        vec![AppAction::Persist, AppAction::Render]
    }

    /// Go to the following slide. Leaves edit mode when the cursor moves.
    pub fn next(&mut self) -> Vec<AppAction> {
        self.navigate(Deck::next)
    }

    /// Go to the preceding slide. Leaves edit mode when the cursor moves.
    pub fn prev(&mut self) -> Vec<AppAction> {
        self.navigate(Deck::prev)
    }

    fn navigate(&mut self, step: fn(&mut Deck) -> bool) -> Vec<AppAction> {
        let committed = self.commit_edits();
        if !step(&mut self.deck) {
            return if committed { vec![AppAction::Persist] } else { vec![] };
        }
        self.editor = None;
        tracing::debug!(index = self.deck.current_index(), "navigated");
        vec![AppAction::Persist, AppAction::Render]
    }

    /// Replace the deck with slides parsed from `text`.
    ///
    /// Blank input leaves the deck untouched.
    pub fn replace_all(&mut self, text: &str) -> Vec<AppAction> {
        if !self.deck.replace_all(text.trim()) {
            tracing::debug!("import produced no slides");
            return vec![];
        }
        self.editor = None;
        tracing::info!(slides = self.deck.slide_count(), "imported slides");
        vec![AppAction::Persist, AppAction::Render]
    }

    /// Overwrite the current slide's text.
    pub fn save_current_content(&mut self, text: &str) -> Vec<AppAction> {
        if let Some(editor) = self.editor.as_mut()
            && editor.text() != text
        {
            *editor = TextBuffer::with_text(text);
        }
        if self.deck.set_current_content(text) {
            vec![AppAction::Persist, AppAction::Render]
        } else {
            vec![AppAction::Render]
        }
    }

    /// Enter edit mode on the current slide, or leave it and keep the text.
    pub fn toggle_edit(&mut self) -> Vec<AppAction> {
        if self.editor.is_some() {
            let committed = self.commit_edits();
            self.editor = None;
            return if committed {
                vec![AppAction::Persist, AppAction::Render]
            } else {
                vec![AppAction::Render]
            };
        }
        self.editor = Some(TextBuffer::with_text(self.deck.current().content.clone()));
        vec![AppAction::Render]
    }

    /// Open the import modal with an empty buffer.
    ///
    /// Edit mode ends first so the buffer owns the keyboard.
    pub fn open_import(&mut self) -> Vec<AppAction> {
        let committed = self.commit_edits();
        self.editor = None;
        self.dispatcher.cancel_pending();
        self.import = Some(TextBuffer::new());

        let mut actions = vec![AppAction::Render];
        if committed {
            actions.insert(0, AppAction::Persist);
        }
        actions
    }

    /// Import the buffer and close the modal.
    pub fn confirm_import(&mut self) -> Vec<AppAction> {
        let Some(buffer) = self.import.take() else {
            return vec![];
        };
        let mut actions = self.replace_all(buffer.text());
        if !actions.contains(&AppAction::Render) {
            actions.push(AppAction::Render);
        }
        actions
    }

    /// Discard the buffer and close the modal.
    pub fn cancel_import(&mut self) -> Vec<AppAction> {
        if self.import.take().is_none() {
            return vec![];
        }
        vec![AppAction::Render]
    }

    /// Start the stopwatch. No-op if running.
    pub fn start_stopwatch(&mut self) -> Vec<AppAction> {
        if self.stopwatch.start(self.now) { vec![AppAction::Render] } else { vec![] }
    }

    /// Stop the stopwatch. No-op if stopped.
    pub fn stop_stopwatch(&mut self) -> Vec<AppAction> {
        if self.stopwatch.stop() { vec![AppAction::Render] } else { vec![] }
    }

    /// Stop the stopwatch and zero it.
    pub fn reset_stopwatch(&mut self) -> Vec<AppAction> {
        self.stopwatch.reset();
        vec![AppAction::Render]
    }

    /// Quit the application, keeping any pending edit.
    pub fn quit(&mut self) -> Vec<AppAction> {
        if self.commit_edits() {
            vec![AppAction::Persist, AppAction::Quit]
        } else {
            vec![AppAction::Quit]
        }
    }

    /// Copy the editor text into the deck. Returns whether the deck changed.
    fn commit_edits(&mut self) -> bool {
        match &self.editor {
            Some(editor) => self.deck.set_current_content(editor.text()),
            None => false,
        }
    }

    /// Earliest pending timer deadline (stopwatch tick or wheel debounce).
    pub fn next_deadline(&self) -> Option<Duration> {
        match (self.stopwatch.next_due(), self.dispatcher.next_deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Which text field owns the keyboard.
    pub fn focus(&self) -> Focus {
        if self.import.is_some() {
            Focus::ImportBuffer
        } else if self.editor.is_some() {
            Focus::Editor
        } else {
            Focus::Page
        }
    }

    /// Slides and cursor.
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Stopwatch state.
    pub fn stopwatch(&self) -> &Stopwatch {
        &self.stopwatch
    }

    /// Whether the current slide is being edited in place.
    pub fn is_editing(&self) -> bool {
        self.editor.is_some()
    }

    /// Slide editor. `None` outside edit mode.
    pub fn editor(&self) -> Option<&TextBuffer> {
        self.editor.as_ref()
    }

    /// Import modal buffer. `None` when the modal is closed.
    pub fn import_buffer(&self) -> Option<&TextBuffer> {
        self.import.as_ref()
    }

    /// Latest clock reading.
    pub fn now(&self) -> Duration {
        self.now
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::{Control, KeyInput, ModalPart, Slide, Target};

    fn app_with(contents: &[&str]) -> App {
        let slides = contents.iter().map(|c| Slide::new(*c)).collect();
        let deck = Deck::from_parts(slides, 0).unwrap();
        App::new(deck, &PresenterConfig::default())
    }

    fn tap(app: &mut App, target: Target) -> Vec<AppAction> {
        let _ = app.handle(AppEvent::PointerDown { x: 10, y: 5, target });
        app.handle(AppEvent::PointerUp { x: 10, y: 5, target })
    }

    fn type_keys(app: &mut App, s: &str) {
        for c in s.chars() {
            let _ = app.handle(AppEvent::Key(KeyInput::Char(c)));
        }
    }

    #[test]
    fn tap_on_page_advances() {
        let mut app = app_with(&["a", "b"]);
        let actions = tap(&mut app, Target::Page);

        assert_eq!(app.deck().current_index(), 1);
        assert_eq!(actions, [AppAction::Persist, AppAction::Render]);
    }

    #[test]
    fn next_at_last_slide_is_noop() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.next();
        assert!(app.next().is_empty());
        assert_eq!(app.deck().current_index(), 1);

        let _ = app.prev();
        assert!(app.prev().is_empty());
        assert_eq!(app.deck().current_index(), 0);
    }

    #[test]
    fn add_slide_enters_edit_mode_on_new_slide() {
        let mut app = app_with(&["a"]);
        let actions = tap(&mut app, Target::Control(Control::AddSlide));

        assert_eq!(actions, [AppAction::Persist, AppAction::Render]);
        assert_eq!(app.deck().slide_count(), 2);
        assert_eq!(app.deck().current_index(), 1);
        assert_eq!(app.focus(), Focus::Editor);

        type_keys(&mut app, "new");
        assert_eq!(app.deck().current().content, "new");
    }

    #[test]
    fn typing_in_editor_persists_each_change() {
        let mut app = app_with(&["a"]);
        let _ = app.toggle_edit();

        let actions = app.handle(AppEvent::Key(KeyInput::Char('!')));
        assert_eq!(actions, [AppAction::Persist, AppAction::Render]);
        assert_eq!(app.deck().current().content, "a!");

        let actions = app.handle(AppEvent::Key(KeyInput::Left));
        assert_eq!(actions, [AppAction::Render]);
    }

    #[test]
    fn keys_in_editor_do_not_navigate() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.toggle_edit();
        let _ = app.handle(AppEvent::Key(KeyInput::Right));
        let _ = app.handle(AppEvent::Key(KeyInput::Char(' ')));

        assert_eq!(app.deck().current_index(), 0);
        assert_eq!(app.deck().current().content, "a ");
    }

    #[test]
    fn navigation_forces_edit_mode_off() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.toggle_edit();
        type_keys(&mut app, "x");

        let _ = app.next();
        assert!(!app.is_editing());
        assert_eq!(app.deck().slides()[0].content, "ax");

        // Blocked move keeps edit mode.
        let _ = app.toggle_edit();
        let _ = app.next();
        assert!(app.is_editing());
    }

    #[test]
    fn esc_leaves_edit_mode() {
        let mut app = app_with(&["a"]);
        let _ = tap(&mut app, Target::Control(Control::EditToggle));
        assert!(app.is_editing());

        let _ = app.handle(AppEvent::Key(KeyInput::Esc));
        assert!(!app.is_editing());
    }

    #[test]
    fn delete_only_slide_is_noop() {
        let mut app = app_with(&["only"]);
        assert!(app.delete_slide().is_empty());
        assert_eq!(app.deck().slide_count(), 1);
    }

    #[test]
    fn delete_while_editing_follows_cursor() {
        let mut app = app_with(&["a", "b"]);
        let _ = app.next();
        let _ = app.toggle_edit();
        let _ = app.delete_slide();

        assert_eq!(app.editor().map(TextBuffer::text), Some("a"));
    }

    #[test]
    fn import_flow_replaces_deck() {
        let mut app = app_with(&["old"]);
        let _ = tap(&mut app, Target::Control(Control::Import));
        assert_eq!(app.focus(), Focus::ImportBuffer);

        type_keys(&mut app, "one");
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        let _ = app.handle(AppEvent::Key(KeyInput::Enter));
        type_keys(&mut app, "two ");

        let actions = tap(&mut app, Target::Modal(ModalPart::Confirm));
        assert_eq!(actions, [AppAction::Persist, AppAction::Render]);
        assert!(app.import_buffer().is_none());

        let contents: Vec<_> = app.deck().slides().iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, ["one", "two"]);
        assert_eq!(app.deck().current_index(), 0);
    }

    #[test]
    fn blank_import_closes_without_change() {
        let mut app = app_with(&["keep"]);
        let _ = app.open_import();
        type_keys(&mut app, "   ");

        let actions = app.handle(AppEvent::Key(KeyInput::Save));
        assert_eq!(actions, [AppAction::Render]);
        assert!(app.import_buffer().is_none());
        assert_eq!(app.deck().current().content, "keep");
    }

    #[test]
    fn backdrop_tap_cancels_import() {
        let mut app = app_with(&["keep"]);
        let _ = app.open_import();
        type_keys(&mut app, "discard me");

        let _ = tap(&mut app, Target::Backdrop);
        assert!(app.import_buffer().is_none());
        assert_eq!(app.deck().current().content, "keep");
    }

    #[test]
    fn stopwatch_runs_on_clock_ticks() {
        let mut app = app_with(&["a"]);
        let _ = tap(&mut app, Target::Control(Control::StartStopwatch));
        assert!(app.stopwatch().is_running());
        assert_eq!(app.next_deadline(), Some(Duration::from_secs(1)));

        let actions = app.handle(AppEvent::Tick { now: Duration::from_millis(3_200) });
        assert_eq!(actions, [AppAction::Render]);
        assert_eq!(app.stopwatch().elapsed_seconds(), 3);

        let _ = tap(&mut app, Target::Control(Control::StopStopwatch));
        let _ = app.handle(AppEvent::Tick { now: Duration::from_secs(10) });
        assert_eq!(app.stopwatch().elapsed_seconds(), 3);

        let _ = tap(&mut app, Target::Control(Control::ResetStopwatch));
        assert_eq!(app.stopwatch().elapsed_seconds(), 0);
    }

    #[test]
    fn wheel_navigates_after_debounce() {
        let mut app = app_with(&["a", "b", "c"]);
        let _ = app.handle(AppEvent::Wheel { delta_x: 40.0, target: Target::Page });
        let _ = app.handle(AppEvent::Wheel { delta_x: 40.0, target: Target::Page });
        assert_eq!(app.deck().current_index(), 0);

        let _ = app.handle(AppEvent::Tick { now: Duration::from_millis(50) });
        assert_eq!(app.deck().current_index(), 1);
    }

    #[test]
    fn quit_commits_unsaved_editor_text() {
        let mut app = app_with(&["a"]);
        let _ = app.toggle_edit();
        // Type into the buffer without the write-through path.
        assert!(app.editor.as_mut().unwrap().handle_key(KeyInput::Char('!')));
        assert_eq!(app.deck().current().content, "a");

        assert_eq!(app.quit(), [AppAction::Persist, AppAction::Quit]);
        assert_eq!(app.deck().current().content, "a!");
    }

    #[test]
    fn resize_only_redraws() {
        let mut app = app_with(&["a", "b"]);
        assert_eq!(app.handle(AppEvent::Resize(120, 40)), [AppAction::Render]);
        assert_eq!(app.deck().current_index(), 0);
    }

    #[test]
    fn quit_after_leaving_edit_mode_only_quits() {
        let mut app = app_with(&["a"]);
        let _ = app.toggle_edit();
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Esc)), [AppAction::Render]);
        assert_eq!(app.handle(AppEvent::Key(KeyInput::Char('q'))), [AppAction::Quit]);
    }
}
