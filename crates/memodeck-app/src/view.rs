//! Display projection.
//!
//! [`SlideView`] is everything a frontend needs to draw one frame, derived
//! from the [`App`] without touching any widget library. The content-length
//! driven [`FontScale`] lets one constant-size screen area show anything from
//! a short phrase to a dense paragraph.

use crate::{App, editor::TextBuffer, stopwatch::format_elapsed};

/// Display scale band, largest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FontScale {
    /// Fewer than 100 characters.
    Largest,
    /// Fewer than 200 characters.
    Large,
    /// Fewer than 400 characters.
    Medium,
    /// Fewer than 600 characters.
    Small,
    /// 600 characters or more.
    Smallest,
}

/// Upper bounds (exclusive) of each band in characters, paired with the scale.
const SCALE_BANDS: [(usize, FontScale); 4] = [
    (100, FontScale::Largest),
    (200, FontScale::Large),
    (400, FontScale::Medium),
    (600, FontScale::Small),
];

impl FontScale {
    /// Scale band for content of `len` characters.
    pub fn for_len(len: usize) -> Self {
        SCALE_BANDS
            .iter()
            .find(|(limit, _)| len < *limit)
            .map_or(FontScale::Smallest, |(_, scale)| *scale)
    }

    /// Scale band for `content`, counted in characters.
    pub fn for_content(content: &str) -> Self {
        Self::for_len(content.chars().count())
    }

    /// Relative font size in `em`. Strictly decreasing across bands.
    pub fn em(self) -> f32 {
        match self {
            FontScale::Largest => 3.0,
            FontScale::Large => 2.5,
            FontScale::Medium => 2.0,
            FontScale::Small => 1.5,
            FontScale::Smallest => 1.2,
        }
    }
}

/// "current of total" readout, one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageCounter {
    /// One-based index of the slide on screen.
    pub current: usize,
    /// Number of slides.
    pub total: usize,
}

/// Everything drawn in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView<'a> {
    /// Slide text (the live editor text while editing).
    pub content: &'a str,
    /// Display scale for `content`.
    pub scale: FontScale,
    /// Page counter.
    pub page: PageCounter,
    /// Whether the delete affordance is shown.
    pub show_delete: bool,
    /// Stopwatch readout, `HH:MM:SS`.
    pub stopwatch: String,
    /// Whether the stopwatch is running.
    pub stopwatch_running: bool,
    /// Editor with cursor while in edit mode.
    pub editor: Option<&'a TextBuffer>,
    /// Import modal buffer while the modal is open.
    pub import: Option<&'a TextBuffer>,
}

impl<'a> SlideView<'a> {
    /// Project the session into a frame.
    pub fn project(app: &'a App) -> Self {
        let deck = app.deck();
        let editor = app.editor();
        let content = editor.map_or(deck.current().content.as_str(), TextBuffer::text);

        Self {
            content,
            scale: FontScale::for_content(content),
            page: PageCounter { current: deck.current_index() + 1, total: deck.slide_count() },
            show_delete: deck.slide_count() > 1,
            stopwatch: format_elapsed(app.stopwatch().elapsed_seconds()),
            stopwatch_running: app.stopwatch().is_running(),
            editor,
            import: app.import_buffer(),
        }
    }
}
