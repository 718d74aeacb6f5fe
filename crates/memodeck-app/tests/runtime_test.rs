//! Runtime tests against a scripted driver.
//!
//! The driver replays a fixed list of steps on a virtual clock, so timer
//! behaviour (stopwatch ticks, wheel debounce) is exercised without sleeping.

#![allow(clippy::unwrap_used)]

use std::{collections::VecDeque, convert::Infallible, time::Duration};

use memodeck_app::{
    App, AppEvent, Control, DeckStore, Driver, KeyInput, MemoryStore, PresenterConfig, Runtime,
    Slide, Store, Target, persist,
};

/// One scripted driver step.
enum Step {
    /// Deliver an event immediately.
    Event(AppEvent),
    /// Let the runtime's poll timeout elapse with no input.
    Wait,
    /// Advance the clock by a fixed amount with no input.
    Advance(Duration),
}

/// Driver replaying scripted steps on a virtual clock.
struct ScriptedDriver {
    steps: VecDeque<Step>,
    clock: Duration,
    renders: usize,
    stopped: bool,
}

impl ScriptedDriver {
    fn new(steps: impl IntoIterator<Item = Step>) -> Self {
        Self { steps: steps.into_iter().collect(), clock: Duration::ZERO, renders: 0, stopped: false }
    }
}

impl Driver for ScriptedDriver {
    type Error = Infallible;
    type Instant = Duration;

    async fn poll_event(&mut self, timeout: Duration) -> Result<Option<AppEvent>, Self::Error> {
        match self.steps.pop_front() {
            Some(Step::Event(event)) => Ok(Some(event)),
            Some(Step::Wait) => {
                self.clock += timeout;
                Ok(None)
            },
            Some(Step::Advance(d)) => {
                self.clock += d;
                Ok(None)
            },
            // Script exhausted: quit.
            None => Ok(Some(AppEvent::Key(KeyInput::Char('q')))),
        }
    }

    fn now(&self) -> Self::Instant {
        self.clock
    }

    fn render(&mut self, _app: &App) -> Result<(), Self::Error> {
        self.renders += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

fn key(k: KeyInput) -> Step {
    Step::Event(AppEvent::Key(k))
}

fn tap(target: Target) -> [Step; 2] {
    [
        Step::Event(AppEvent::PointerDown { x: 5, y: 5, target }),
        Step::Event(AppEvent::PointerUp { x: 5, y: 5, target }),
    ]
}

fn seeded_store(contents: &[&str], index: usize) -> MemoryStore {
    let mut kv = MemoryStore::new();
    let slides: Vec<_> = contents.iter().map(|c| Slide::new(*c)).collect();
    kv.set(persist::SLIDES_KEY, &serde_json::to_string(&slides).unwrap()).unwrap();
    kv.set(persist::INDEX_KEY, &index.to_string()).unwrap();
    kv
}

#[tokio::test]
async fn resumes_stored_deck_and_persists_navigation() {
    let kv = seeded_store(&["a", "b", "c"], 1);
    let driver = ScriptedDriver::new([key(KeyInput::Right)]);

    let runtime = Runtime::new(driver, kv.clone(), &PresenterConfig::default());
    assert_eq!(runtime.app().deck().current_index(), 1);

    let app = runtime.run().await.unwrap();
    assert_eq!(app.deck().current_index(), 2);
    assert_eq!(kv.get(persist::INDEX_KEY).unwrap().as_deref(), Some("2"));
}

#[tokio::test]
async fn empty_store_starts_with_default_deck() {
    let kv = MemoryStore::new();
    let app = Runtime::new(ScriptedDriver::new([]), kv.clone(), &PresenterConfig::default())
        .run()
        .await
        .unwrap();

    assert_eq!(app.deck().slide_count(), 1);
    assert!(kv.is_empty(), "nothing mutated, nothing written");
}

#[tokio::test]
async fn stopwatch_counts_virtual_seconds() {
    let mut steps = vec![];
    steps.extend(tap(Target::Control(Control::StartStopwatch)));
    steps.extend([Step::Wait, Step::Wait, Step::Wait, Step::Wait, Step::Wait]);
    steps.extend(tap(Target::Control(Control::StopStopwatch)));
    steps.push(Step::Advance(Duration::from_secs(30)));

    let config = PresenterConfig { idle_poll: Duration::from_secs(5), ..Default::default() };
    let app = Runtime::new(ScriptedDriver::new(steps), MemoryStore::new(), &config)
        .run()
        .await
        .unwrap();

    // Each wait lasts exactly until the next tick is due.
    assert_eq!(app.stopwatch().elapsed_seconds(), 5);
    assert!(!app.stopwatch().is_running());
}

#[tokio::test]
async fn wheel_burst_navigates_once_after_debounce() {
    let kv = seeded_store(&["a", "b", "c"], 0);
    let wheel = |delta_x| Step::Event(AppEvent::Wheel { delta_x, target: Target::Page });
    let steps = [wheel(40.0), wheel(40.0), wheel(40.0), Step::Wait];

    let app = Runtime::new(ScriptedDriver::new(steps), kv, &PresenterConfig::default())
        .run()
        .await
        .unwrap();

    assert_eq!(app.deck().current_index(), 1);
}

#[tokio::test]
async fn import_then_edit_round_trips_through_store() {
    let kv = MemoryStore::new();
    let mut steps = vec![key(KeyInput::Char('i'))];
    steps.extend("alpha\n\nbeta".chars().map(|c| match c {
        '\n' => key(KeyInput::Enter),
        c => key(KeyInput::Char(c)),
    }));
    steps.push(key(KeyInput::Save));
    steps.push(key(KeyInput::Right));
    steps.push(key(KeyInput::Char('e')));
    steps.push(key(KeyInput::Char('!')));
    steps.push(key(KeyInput::Esc));

    let app = Runtime::new(ScriptedDriver::new(steps), kv.clone(), &PresenterConfig::default())
        .run()
        .await
        .unwrap();

    let reloaded = DeckStore::new(kv).load();
    assert_eq!(&reloaded, app.deck());
    let contents: Vec<_> = reloaded.slides().iter().map(|s| s.content.as_str()).collect();
    assert_eq!(contents, ["alpha", "beta!"]);
    assert_eq!(reloaded.current_index(), 1);
}
