//! Saved-card collection

use std::collections::HashSet;
use uuid::Uuid;

use super::content::Card;

/// Order-preserving collection of saved cards, unique by card id.
///
/// Grows only by explicit save, shrinks only by explicit deletion; it
/// lives for the session unless the embedding application persists it.
#[derive(Debug, Default)]
pub struct Gallery {
    cards: Vec<Card>,
}

impl Gallery {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Append a card unless one with the same id is already saved.
    /// Returns whether the card was added.
    pub fn add(&mut self, card: Card) -> bool {
        if self.cards.iter().any(|saved| saved.id == card.id) {
            return false;
        }
        self.cards.push(card);
        true
    }

    /// Remove every card whose position is in `indices`, as one atomic
    /// batch. Out-of-range positions are ignored; survivors keep their
    /// relative order.
    pub fn remove_at(&mut self, indices: &HashSet<usize>) {
        let mut position = 0;
        self.cards.retain(|_| {
            let keep = !indices.contains(&position);
            position += 1;
            keep
        });
    }

    /// Read-only ordered snapshot.
    pub fn list(&self) -> Vec<Card> {
        self.cards.clone()
    }

    pub fn contains(&self, card_id: Uuid) -> bool {
        self.cards.iter().any(|saved| saved.id == card_id)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
