//! Model module - Session state and data types
//!
//! This module contains all the data structures and state management
//! for the deck session. It is organized into submodules by
//! responsibility:
//!
//! - `types`: Core type definitions (moods, decisions, session state)
//! - `content`: Fetched content items and the cards wrapping them
//! - `gallery`: Saved-card collection
//! - `artic_client`: Visual-work provider client
//! - `poetrydb_client`: Text-work provider client
//! - `aggregator`: Concurrent fetch, merge and shuffle into a deck
//! - `session`: Session model owning deck, gallery and refresh state

mod aggregator;
mod artic_client;
mod content;
mod gallery;
mod poetrydb_client;
mod session;
mod types;

// Re-export all public types for convenient access
pub use types::{available_moods, Decision, DeckPhase, MoodOption, SessionState};

pub use content::{Artwork, Card, ContentItem, Poem};

pub use gallery::Gallery;

pub use artic_client::ArticClient;
pub use poetrydb_client::PoetryDbClient;

pub use aggregator::{assemble_deck, DeckBuilder};

pub use session::{SessionModel, SWIPE_THRESHOLD};
