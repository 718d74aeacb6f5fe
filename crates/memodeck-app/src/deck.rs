//! Slide deck state.
//!
//! This module defines [`Deck`], the ordered list of [`Slide`]s plus the
//! cursor selecting the slide on screen.
//!
//! # Invariants
//!
//! - A deck is never empty.
//! - `current_index() < slide_count()` after every operation.
//!
//! Both hold structurally: the fields are private and every constructor and
//! mutator clamps the cursor. Operations attempted against a boundary
//! (deleting the last remaining slide, moving past either end, importing
//! blank text) are no-ops reported through a `false` return, never errors.

use serde::{Deserialize, Serialize};

/// One page of text. Identity is positional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Slide text.
    pub content: String,
}

impl Slide {
    /// Create a slide with the given text.
    pub fn new(content: impl Into<String>) -> Self {
        Self { content: content.into() }
    }
}

/// Ordered, never-empty sequence of slides with a cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    slides: Vec<Slide>,
    current: usize,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Single empty slide, cursor at 0.
    pub fn new() -> Self {
        Self { slides: vec![Slide::default()], current: 0 }
    }

    /// Build a deck from stored parts.
    ///
    /// Returns `None` if `slides` is empty. An out-of-range `index` is clamped
    /// to the last slide.
    pub fn from_parts(slides: Vec<Slide>, index: usize) -> Option<Self> {
        if slides.is_empty() {
            return None;
        }
        let current = index.min(slides.len() - 1);
        Some(Self { slides, current })
    }

    /// All slides in order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides. Always at least 1.
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Zero-based cursor position.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Slide under the cursor.
    pub fn current(&self) -> &Slide {
        &self.slides[self.current]
    }

    /// Append an empty slide and move the cursor onto it.
    pub fn add_slide(&mut self) {
        self.slides.push(Slide::default());
        self.current = self.slides.len() - 1;
    }

    /// Remove the slide under the cursor.
    ///
    /// No-op returning `false` when only one slide remains.
    pub fn delete_slide(&mut self) -> bool {
        if self.slides.len() <= 1 {
            return false;
        }
        self.slides.remove(self.current);
        self.current = self.current.min(self.slides.len() - 1);
        true
    }

    /// Move to the following slide. `false` at the last slide.
    pub fn next(&mut self) -> bool {
        if self.current + 1 >= self.slides.len() {
            return false;
        }
        self.current += 1;
        true
    }

    /// Move to the preceding slide. `false` at the first slide.
    pub fn prev(&mut self) -> bool {
        if self.current == 0 {
            return false;
        }
        self.current -= 1;
        true
    }

    /// Replace the whole deck with slides parsed from `text`.
    ///
    /// See [`parse_slides`]. If the text yields no slides the deck is left
    /// untouched and `false` is returned; otherwise the cursor resets to 0.
    pub fn replace_all(&mut self, text: &str) -> bool {
        let slides = parse_slides(text);
        if slides.is_empty() {
            return false;
        }
        self.slides = slides;
        self.current = 0;
        true
    }

    /// Overwrite the text of the slide under the cursor.
    ///
    /// Returns whether the content changed.
    pub fn set_current_content(&mut self, text: &str) -> bool {
        let slide = &mut self.slides[self.current];
        if slide.content == text {
            return false;
        }
        text.clone_into(&mut slide.content);
        true
    }
}

/// Split bulk text into slides.
///
/// Blocks are separated by one or more blank lines (lines holding only
/// whitespace). Each block is trimmed and empty blocks are dropped. Both `\n`
/// and `\r\n` line endings are accepted.
pub fn parse_slides(text: &str) -> Vec<Slide> {
    let mut slides = Vec::new();
    let mut block: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            push_block(&mut slides, &mut block);
        } else {
            block.push(line);
        }
    }
    push_block(&mut slides, &mut block);

    slides
}

fn push_block(slides: &mut Vec<Slide>, block: &mut Vec<&str>) {
    if block.is_empty() {
        return;
    }
    let joined = block.join("\n");
    block.clear();

    let trimmed = joined.trim();
    if !trimmed.is_empty() {
        slides.push(Slide::new(trimmed));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn deck_of(contents: &[&str], index: usize) -> Deck {
        Deck::from_parts(contents.iter().map(|c| Slide::new(*c)).collect(), index).unwrap()
    }

    #[test]
    fn new_deck_has_one_empty_slide() {
        let deck = Deck::new();
        assert_eq!(deck.slide_count(), 1);
        assert_eq!(deck.current_index(), 0);
        assert_eq!(deck.current().content, "");
    }

    #[test]
    fn from_parts_rejects_empty_and_clamps_index() {
        assert!(Deck::from_parts(Vec::new(), 0).is_none());

        let deck = deck_of(&["a", "b"], 7);
        assert_eq!(deck.current_index(), 1);
    }

    #[test]
    fn add_slide_moves_cursor_to_new_slide() {
        let mut deck = deck_of(&["a", "b"], 0);
        deck.add_slide();

        assert_eq!(deck.slide_count(), 3);
        assert_eq!(deck.current_index(), 2);
        assert_eq!(deck.current().content, "");
    }

    #[test]
    fn delete_single_slide_is_noop() {
        let mut deck = deck_of(&["only"], 0);
        assert!(!deck.delete_slide());
        assert_eq!(deck, deck_of(&["only"], 0));
    }

    #[test]
    fn delete_last_slide_clamps_cursor() {
        let mut deck = deck_of(&["a", "b", "c"], 2);
        assert!(deck.delete_slide());

        assert_eq!(deck.slide_count(), 2);
        assert_eq!(deck.current_index(), 1);
        assert_eq!(deck.current().content, "b");
    }

    #[test]
    fn delete_middle_slide_keeps_cursor() {
        let mut deck = deck_of(&["a", "b", "c"], 1);
        assert!(deck.delete_slide());
        assert_eq!(deck.current().content, "c");
    }

    #[test]
    fn navigation_stops_at_ends() {
        let mut deck = deck_of(&["a", "b"], 0);

        assert!(!deck.prev());
        assert_eq!(deck.current_index(), 0);

        assert!(deck.next());
        assert!(!deck.next());
        assert_eq!(deck.current_index(), 1);

        assert!(deck.prev());
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn replace_all_splits_on_blank_lines() {
        let mut deck = deck_of(&["old"], 0);
        assert!(deck.replace_all("a\n\nb\n\nc"));

        let contents: Vec<_> = deck.slides().iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, ["a", "b", "c"]);
        assert_eq!(deck.current_index(), 0);
    }

    #[test]
    fn replace_all_with_blank_text_is_noop() {
        let mut deck = deck_of(&["keep", "me"], 1);
        assert!(!deck.replace_all("   \n\n  "));
        assert_eq!(deck, deck_of(&["keep", "me"], 1));
    }

    #[test]
    fn parse_keeps_multiline_blocks_and_collapses_separators() {
        let slides = parse_slides("  first line\nsecond line  \n\n\n \t \nnext\r\n\r\nlast\n");
        let contents: Vec<_> = slides.iter().map(|s| s.content.as_str()).collect();
        assert_eq!(contents, ["first line\nsecond line", "next", "last"]);
    }

    #[test]
    fn set_current_content_reports_change() {
        let mut deck = deck_of(&["a", "b"], 1);
        assert!(deck.set_current_content("changed"));
        assert!(!deck.set_current_content("changed"));
        assert_eq!(deck.slides()[1].content, "changed");
        assert_eq!(deck.slides()[0].content, "a");
    }
}
