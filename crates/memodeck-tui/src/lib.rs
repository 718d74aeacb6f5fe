//! Terminal UI for memodeck
//!
//! A thin shell over [`memodeck_app::Driver`] that provides terminal-specific
//! I/O. All orchestration logic lives in the generic [`memodeck_app::Runtime`].
//!
//! This crate only handles terminal input, hit-testing and rendering.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod terminal;
pub mod ui;

pub use memodeck_app::{App, AppAction, AppEvent, Driver, KeyInput, Runtime};
pub use terminal::{TerminalDriver, TerminalError};
