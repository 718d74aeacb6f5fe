//! UI rendering
//!
//! Rendering functions that convert the [`SlideView`] projection into
//! terminal output using ratatui widgets. Each pass also records a
//! [`Hitmap`] so mouse events can be resolved to the target under them.

mod controls;
mod hitmap;
mod modal;
mod slide;
mod wrap;

pub use hitmap::Hitmap;
use memodeck_app::{App, SlideView};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Render the entire UI, returning the hitmap of the drawn frame.
pub fn render(frame: &mut Frame, app: &App) -> Hitmap {
    const BAR_HEIGHT: u16 = 1;
    const SLIDE_MIN_HEIGHT: u16 = 1;

    let view = SlideView::project(app);
    let mut hitmap = Hitmap::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BAR_HEIGHT),
            Constraint::Min(SLIDE_MIN_HEIGHT),
            Constraint::Length(BAR_HEIGHT),
        ])
        .split(frame.area());

    let [top_area, slide_area, bottom_area] = chunks.as_ref() else {
        return hitmap;
    };

    slide::render(frame, &view, *slide_area, &mut hitmap);
    controls::render_top(frame, &view, *top_area, &mut hitmap);
    controls::render_bottom(frame, &view, *bottom_area, &mut hitmap);

    if let Some(buffer) = view.import {
        modal::render(frame, buffer, &mut hitmap);
    }

    hitmap
}
