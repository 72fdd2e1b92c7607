//! Mood-driven inspiration deck engine.
//!
//! Fetches visual artworks and poems from two public APIs for a selected
//! mood, merges them into a shuffled deck of cards, and drives the
//! swipe-to-decide protocol: the front card is saved to a gallery or
//! discarded, one decision at a time. Rendering is the embedding
//! application's job; this crate owns the state and the operations.

pub mod controller;
pub mod error;
pub mod logging;
pub mod model;

pub use controller::DeckController;
pub use error::{InvalidStateError, ProviderError, RefreshError};
pub use model::{
    available_moods, Artwork, Card, ContentItem, Decision, DeckBuilder, DeckPhase, Gallery,
    MoodOption, Poem, SessionModel, SessionState,
};
