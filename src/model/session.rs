//! Deck session state and the single-active-card decision protocol

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::error::InvalidStateError;
use super::content::Card;
use super::gallery::Gallery;
use super::types::{Decision, DeckPhase, MoodOption, SessionState};

/// Horizontal displacement beyond which a released drag commits a
/// decision (positive saves, negative discards).
pub const SWIPE_THRESHOLD: f32 = 100.0;
/// Degrees of card rotation per unit of horizontal displacement.
const ROTATION_DIVISOR: f32 = 20.0;
/// Error banners disappear on their own after this many seconds.
const ERROR_DISPLAY_SECS: u64 = 5;

/// Owner of all mutable session state: the deck, the gallery, and the
/// surrounding mood/loading/drag state.
///
/// Every mutation goes through these methods, so the single-active-card
/// invariant holds even when the host is multi-threaded. Locks are
/// always taken in state, deck, gallery order.
pub struct SessionModel {
    state: Arc<Mutex<SessionState>>,
    deck: Arc<Mutex<Vec<Card>>>,
    gallery: Arc<Mutex<Gallery>>,
}

impl SessionModel {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(SessionState::default())),
            deck: Arc::new(Mutex::new(Vec::new())),
            gallery: Arc::new(Mutex::new(Gallery::new())),
        }
    }

    // ========================================================================
    // Snapshots
    // ========================================================================

    pub async fn get_session_state(&self) -> SessionState {
        self.state.lock().await.clone()
    }

    pub async fn get_deck(&self) -> Vec<Card> {
        self.deck.lock().await.clone()
    }

    pub async fn front_card(&self) -> Option<Card> {
        self.deck.lock().await.first().cloned()
    }

    pub async fn get_gallery(&self) -> Vec<Card> {
        self.gallery.lock().await.list()
    }

    pub async fn gallery_len(&self) -> usize {
        self.gallery.lock().await.len()
    }

    pub async fn is_loading(&self) -> bool {
        self.state.lock().await.is_loading
    }

    pub async fn selected_mood(&self) -> MoodOption {
        self.state.lock().await.selected_mood.clone()
    }

    pub async fn phase(&self) -> DeckPhase {
        let state = self.state.lock().await;
        if state.is_loading {
            return DeckPhase::Loading;
        }
        let deck = self.deck.lock().await;
        if deck.is_empty() {
            DeckPhase::IdleEmpty
        } else {
            DeckPhase::HasDeck
        }
    }

    // ========================================================================
    // Refresh protocol
    // ========================================================================

    /// Start a refresh for `mood`: the deck clears immediately and a
    /// new generation is issued while the loading flag is up. The
    /// returned generation must accompany the eventual
    /// [`install_deck`](Self::install_deck) or
    /// [`refresh_failed`](Self::refresh_failed) call.
    pub async fn begin_refresh(&self, mood: MoodOption) -> u64 {
        let mut state = self.state.lock().await;
        let mut deck = self.deck.lock().await;
        deck.clear();
        state.selected_mood = mood;
        state.is_loading = true;
        state.drag_offset = 0.0;
        state.error_message = None;
        state.error_timestamp = None;
        state.refresh_generation += 1;
        state.refresh_generation
    }

    /// Install a refresh result. Returns false, leaving all state
    /// untouched, when a newer refresh has superseded `generation`;
    /// the deck always reflects the most recently selected mood.
    pub async fn install_deck(&self, generation: u64, new_deck: Vec<Card>) -> bool {
        let mut state = self.state.lock().await;
        if state.refresh_generation != generation {
            return false;
        }
        let mut deck = self.deck.lock().await;
        *deck = new_deck;
        state.is_loading = false;
        true
    }

    /// Record a refresh failure: the deck stays empty, the loading flag
    /// drops, and the message is surfaced to the presentation layer.
    /// Stale failures are dropped the same way stale results are.
    pub async fn refresh_failed(&self, generation: u64, message: String) -> bool {
        let mut state = self.state.lock().await;
        if state.refresh_generation != generation {
            return false;
        }
        state.is_loading = false;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
        true
    }

    // ========================================================================
    // Decision protocol
    // ========================================================================

    /// Resolve the front card. `Save` appends it to the gallery (unless
    /// a card with the same id is already saved) before removal;
    /// `Discard` just removes it. Fails when there is no front card to
    /// decide on.
    pub async fn decide(&self, decision: Decision) -> Result<Card, InvalidStateError> {
        let mut state = self.state.lock().await;
        if state.is_loading {
            return Err(InvalidStateError::RefreshInFlight);
        }
        let mut deck = self.deck.lock().await;
        if deck.is_empty() {
            return Err(InvalidStateError::EmptyDeck);
        }
        let card = deck.remove(0);
        if decision == Decision::Save {
            let added = self.gallery.lock().await.add(card.clone());
            tracing::debug!(card_id = %card.id, added, "Front card saved to gallery");
        }
        state.drag_offset = 0.0;
        Ok(card)
    }

    // ========================================================================
    // Drag protocol
    // ========================================================================

    /// Record the front card's current horizontal displacement. Ignored
    /// when there is no front card to drag.
    pub async fn report_drag(&self, displacement: f32) {
        let mut state = self.state.lock().await;
        if state.is_loading {
            return;
        }
        let deck = self.deck.lock().await;
        if deck.is_empty() {
            return;
        }
        drop(deck);
        state.drag_offset = displacement;
    }

    /// Threshold test on release: past [`SWIPE_THRESHOLD`] the drag
    /// commits a decision, positive direction saving and negative
    /// discarding. Under the threshold the displacement snaps back to
    /// zero with no transition. Returns the committed decision, if any.
    pub async fn resolve_drag(&self) -> Option<Decision> {
        let displacement = {
            let mut state = self.state.lock().await;
            let displacement = state.drag_offset;
            state.drag_offset = 0.0;
            displacement
        };
        if displacement.abs() <= SWIPE_THRESHOLD {
            return None;
        }
        let decision = if displacement > 0.0 {
            Decision::Save
        } else {
            Decision::Discard
        };
        self.decide(decision).await.ok().map(|_| decision)
    }

    /// Displacement readback for rendering: only the front card ever
    /// reports a non-zero offset.
    pub async fn drag_offset_for(&self, card_id: Uuid) -> f32 {
        let state = self.state.lock().await;
        let deck = self.deck.lock().await;
        match deck.first() {
            Some(front) if front.id == card_id => state.drag_offset,
            _ => 0.0,
        }
    }

    /// Derived rotation in degrees for the dragged card.
    pub async fn rotation_for(&self, card_id: Uuid) -> f32 {
        self.drag_offset_for(card_id).await / ROTATION_DIVISOR
    }

    // ========================================================================
    // Gallery
    // ========================================================================

    /// Remove the cards at the given gallery positions in one batch.
    pub async fn remove_from_gallery(&self, indices: &HashSet<usize>) {
        self.gallery.lock().await.remove_at(indices);
    }

    // ========================================================================
    // Error surfacing
    // ========================================================================

    pub async fn set_error(&self, message: String) {
        let mut state = self.state.lock().await;
        state.error_message = Some(message);
        state.error_timestamp = Some(Instant::now());
    }

    pub async fn clear_error(&self) {
        let mut state = self.state.lock().await;
        state.error_message = None;
        state.error_timestamp = None;
    }

    pub async fn has_error(&self) -> bool {
        self.state.lock().await.error_message.is_some()
    }

    pub async fn auto_clear_old_errors(&self) {
        let mut state = self.state.lock().await;
        if let Some(timestamp) = state.error_timestamp {
            if timestamp.elapsed().as_secs() > ERROR_DISPLAY_SECS {
                state.error_message = None;
                state.error_timestamp = None;
            }
        }
    }
}

impl Default for SessionModel {
    fn default() -> Self {
        Self::new()
    }
}
