//! Drag reporting, front-card decisions, and gallery edits

use std::collections::HashSet;

use crate::error::InvalidStateError;
use crate::model::Decision;
use super::DeckController;

impl DeckController {
    /// Resolve the front card directly, bypassing the drag gesture.
    pub async fn decide(&self, decision: Decision) -> Result<(), InvalidStateError> {
        let card = self.model.decide(decision).await?;
        tracing::info!(
            decision = ?decision,
            card_id = %card.id,
            title = %card.content.title(),
            "Front card resolved"
        );
        Ok(())
    }

    /// Forward the front card's current horizontal displacement from
    /// the gesture layer.
    pub async fn report_drag(&self, displacement: f32) {
        self.model.report_drag(displacement).await;
    }

    /// Release the drag: past the threshold this commits a save or
    /// discard, otherwise the card snaps back.
    pub async fn resolve_drag(&self) {
        if let Some(decision) = self.model.resolve_drag().await {
            tracing::debug!(decision = ?decision, "Drag committed");
        }
    }

    /// Remove the cards at the given gallery positions in one batch.
    pub async fn delete_from_gallery(&self, indices: &HashSet<usize>) {
        tracing::debug!(count = indices.len(), "Removing cards from gallery");
        self.model.remove_from_gallery(indices).await;
    }
}
