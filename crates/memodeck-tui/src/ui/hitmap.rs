//! Pointer target resolution.
//!
//! Rendering records where each interactive region landed; the terminal
//! driver resolves mouse coordinates against the last frame's [`Hitmap`] to
//! produce the [`Target`] an event is delivered to.

use memodeck_app::Target;
use ratatui::layout::{Position, Rect};

/// Regions of the last rendered frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hitmap {
    /// Regions in paint order; later entries sit on top.
    regions: Vec<(Rect, Target)>,
    /// Import modal panel. Everything outside it is backdrop while set.
    modal: Option<Rect>,
}

impl Hitmap {
    /// Create an empty hitmap. Every point resolves to [`Target::Page`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a region painted on top of earlier ones.
    pub fn push(&mut self, area: Rect, target: Target) {
        if !area.is_empty() {
            self.regions.push((area, target));
        }
    }

    /// Mark the import modal panel.
    pub fn set_modal(&mut self, panel: Rect) {
        self.modal = Some(panel);
    }

    /// Target under (`x`, `y`).
    pub fn resolve(&self, x: u16, y: u16) -> Target {
        let point = Position { x, y };
        if let Some(panel) = self.modal
            && !panel.contains(point)
        {
            return Target::Backdrop;
        }

        self.regions
            .iter()
            .rev()
            .find(|(area, _)| area.contains(point))
            .map_or(Target::Page, |(_, target)| *target)
    }
}
