//! Deck persistence over a [`Store`].
//!
//! Two keys hold the snapshot:
//!
//! - `presentationSlides`: JSON array of `{"content": string}`
//! - `currentSlideIndex`: decimal integer string
//!
//! There is no version field. Loading never fails: absent keys give the
//! default deck, and malformed entries are logged, discarded and replaced by
//! defaults so a corrupt store cannot prevent startup.

use crate::{
    Deck, Slide,
    store::{Store, StoreError},
};

/// Storage key for the slide list.
pub const SLIDES_KEY: &str = "presentationSlides";

/// Storage key for the cursor position.
pub const INDEX_KEY: &str = "currentSlideIndex";

/// Reads and writes [`Deck`] snapshots.
#[derive(Debug, Clone)]
pub struct DeckStore<S> {
    store: S,
}

impl<S: Store> DeckStore<S> {
    /// Wrap a key/value store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Underlying key/value store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the persisted deck, falling back to the default deck.
    pub fn load(&mut self) -> Deck {
        let slides = match self.load_slides() {
            Ok(Some(slides)) => slides,
            Ok(None) => return Deck::new(),
            Err(e) => {
                tracing::warn!("discarding stored slides: {e}");
                if let Err(e) = self.store.remove(SLIDES_KEY) {
                    tracing::warn!("failed to remove corrupt slides entry: {e}");
                }
                return Deck::new();
            },
        };

        let index = self.load_index();
        match Deck::from_parts(slides, index) {
            Some(deck) => {
                if deck.current_index() != index {
                    tracing::warn!(stored = index, clamped = deck.current_index(), "slide index out of range");
                }
                deck
            },
            None => {
                tracing::warn!("stored slide list is empty, using default deck");
                Deck::new()
            },
        }
    }

    /// Persist both keys.
    pub fn save(&mut self, deck: &Deck) -> Result<(), StoreError> {
        let slides = serde_json::to_string(deck.slides())?;
        self.store.set(SLIDES_KEY, &slides)?;
        self.store.set(INDEX_KEY, &deck.current_index().to_string())?;
        tracing::trace!(slides = deck.slide_count(), index = deck.current_index(), "saved deck");
        Ok(())
    }

    fn load_slides(&self) -> Result<Option<Vec<Slide>>, StoreError> {
        let Some(raw) = self.store.get(SLIDES_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn load_index(&self) -> usize {
        let raw = match self.store.get(INDEX_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(e) => {
                tracing::warn!("failed to read slide index: {e}");
                return 0;
            },
        };

        raw.trim().parse().unwrap_or_else(|e| {
            tracing::warn!(value = %raw, "discarding stored slide index: {e}");
            0
        })
    }
}
