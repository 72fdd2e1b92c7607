//! Mood selection and deck refresh

use crate::model::MoodOption;
use super::DeckController;

impl DeckController {
    /// Select a mood and refresh the deck for it. This is also the
    /// manual refresh action: re-selecting the current mood deals a
    /// fresh deck.
    ///
    /// Overlapping calls are safe: each refresh carries a generation
    /// tag, and a completion whose generation has been superseded is
    /// dropped instead of overwriting newer state.
    pub async fn select_mood(&self, mood: MoodOption) {
        let generation = self.model.begin_refresh(mood.clone()).await;
        tracing::debug!(
            mood = %mood.name,
            search_term = %mood.search_term,
            generation,
            "Refreshing deck"
        );

        match self.builder.build_deck(&mood).await {
            Ok(deck) => {
                let cards = deck.len();
                if self.model.install_deck(generation, deck).await {
                    tracing::info!(mood = %mood.name, cards, "Deck installed");
                } else {
                    tracing::debug!(generation, "Dropping superseded refresh result");
                }
            }
            Err(e) => {
                tracing::error!(mood = %mood.name, error = %e, "Deck refresh failed");
                let message = Self::format_error(&e);
                if !self.model.refresh_failed(generation, message).await {
                    tracing::debug!(generation, "Dropping superseded refresh failure");
                }
            }
        }
    }

    /// Re-run the refresh for whatever mood is currently selected.
    pub async fn refresh_current(&self) {
        let mood = self.model.selected_mood().await;
        self.select_mood(mood).await;
    }
}
