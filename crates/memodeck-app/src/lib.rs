//! Application layer for memodeck
//!
//! Pure state machines and generic runtime for a single-user slide presenter
//! with a stopwatch, enabling deterministic testing with the same code that
//! runs in the terminal.
//!
//! # Components
//!
//! - [`App`]: session state machine (deck, stopwatch, edit mode, import)
//! - [`Deck`]: ordered, never-empty slide list with a cursor
//! - [`Stopwatch`]: start/stop/reset counter driven by a one-second tick
//! - [`Dispatcher`]: classifies tap, swipe, wheel and key events into
//!   [`Command`]s
//! - [`SlideView`]: pure projection of the session for rendering
//! - [`DeckStore`]: deck snapshots over a key/value [`Store`]
//! - [`Driver`]: Trait for platform-specific I/O abstraction
//! - [`Runtime`]: Generic orchestration loop using Driver

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod action;
mod app;
mod command;
mod config;
mod debounce;
pub mod deck;
mod dispatch;
mod driver;
pub mod editor;
mod event;
mod input;
pub mod persist;
mod runtime;
pub mod stopwatch;
pub mod store;
pub mod view;

pub use action::AppAction;
pub use app::App;
pub use command::Command;
pub use config::PresenterConfig;
pub use debounce::Debounce;
pub use deck::{Deck, Slide, parse_slides};
pub use dispatch::Dispatcher;
pub use driver::Driver;
pub use event::AppEvent;
pub use input::{Control, Focus, KeyInput, ModalPart, Target};
pub use persist::DeckStore;
pub use runtime::Runtime;
pub use stopwatch::{Stopwatch, format_elapsed};
pub use store::{FileStore, MemoryStore, Store, StoreError};
pub use view::{FontScale, PageCounter, SlideView};
