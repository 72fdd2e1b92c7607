//! Deck assembly: concurrent fetch from both sources, merge, shuffle

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{ProviderError, RefreshError};
use super::artic_client::ArticClient;
use super::content::{Artwork, Card, ContentItem, Poem};
use super::poetrydb_client::PoetryDbClient;
use super::types::MoodOption;

/// How many items each source contributes to a deck.
const PER_SOURCE_COUNT: usize = 2;

/// Builds a fresh deck for a mood by querying both content sources.
#[derive(Clone)]
pub struct DeckBuilder {
    artic: ArticClient,
    poetrydb: PoetryDbClient,
}

impl DeckBuilder {
    pub fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            artic: ArticClient::new()?,
            poetrydb: PoetryDbClient::new()?,
        })
    }

    /// Fetch both sources concurrently and produce a shuffled deck.
    ///
    /// All-or-nothing: if either source fails the whole refresh fails
    /// and no partial deck is produced. The placeholder mood (empty
    /// search term) yields an empty deck without touching the network.
    pub async fn build_deck(&self, mood: &MoodOption) -> Result<Vec<Card>, RefreshError> {
        if mood.is_placeholder() {
            return Ok(Vec::new());
        }

        // Join, not race: both fetches must complete before we proceed
        let (artworks, poems) = futures::join!(
            self.artic.search_artworks(&mood.search_term),
            self.poetrydb.search_poems(&mood.search_term),
        );

        let artworks = artworks.map_err(RefreshError::Artworks)?;
        let poems = poems.map_err(RefreshError::Poems)?;

        Ok(assemble_deck(artworks, poems, &mut rand::thread_rng()))
    }
}

/// Wrap the first two items from each source into cards and shuffle
/// them into a uniformly random order. Every permutation of the
/// resulting deck is equally likely.
pub fn assemble_deck<R: Rng>(artworks: Vec<Artwork>, poems: Vec<Poem>, rng: &mut R) -> Vec<Card> {
    let mut deck: Vec<Card> = artworks
        .into_iter()
        .take(PER_SOURCE_COUNT)
        .map(|artwork| Card::new(ContentItem::Art(artwork)))
        .chain(
            poems
                .into_iter()
                .take(PER_SOURCE_COUNT)
                .map(|poem| Card::new(ContentItem::Poem(poem))),
        )
        .collect();
    deck.shuffle(rng);
    deck
}
