//! Core type definitions for the deck session

use std::time::Instant;
use uuid::Uuid;

/// A named emotional filter mapping to the search term used against
/// both content sources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoodOption {
    pub id: Uuid,
    pub name: String,
    pub search_term: String,
}

impl MoodOption {
    pub fn new(name: &str, search_term: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            search_term: search_term.to_string(),
        }
    }

    /// The unselected placeholder mood. Its empty search term
    /// legitimately yields an empty deck rather than an error.
    pub fn placeholder() -> Self {
        Self::new("Choose", "")
    }

    pub fn is_placeholder(&self) -> bool {
        self.search_term.is_empty()
    }
}

/// The mood catalog offered to the user, placeholder first.
pub fn available_moods() -> Vec<MoodOption> {
    vec![
        MoodOption::placeholder(),
        MoodOption::new("Despair", "sorrow"),
        MoodOption::new("Love", "romance"),
        MoodOption::new("Devotion", "faith"),
        MoodOption::new("Obsession", "desire"),
        MoodOption::new("Vexed", "storm"),
        MoodOption::new("Misc", "abstract"),
    ]
}

/// Resolution of the front card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Save,
    Discard,
}

/// Coarse state of the deck session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckPhase {
    /// No deck and no refresh in flight
    IdleEmpty,
    /// A refresh is in flight; the deck is cleared meanwhile
    Loading,
    /// A non-empty deck is installed and the front card is decidable
    HasDeck,
}

/// Session state read by the presentation layer.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub selected_mood: MoodOption,
    pub is_loading: bool,
    /// Transient horizontal displacement of the front card
    pub drag_offset: f32,
    pub error_message: Option<String>,
    pub error_timestamp: Option<Instant>,
    /// Monotonic counter tagging the in-flight refresh; completions
    /// carrying an older value are stale and get dropped
    pub refresh_generation: u64,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            selected_mood: MoodOption::placeholder(),
            is_loading: false,
            drag_offset: 0.0,
            error_message: None,
            error_timestamp: None,
            refresh_generation: 0,
        }
    }
}
