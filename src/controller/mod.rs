//! Controller module - the operation surface the presentation layer drives
//!
//! The controller owns nothing itself; it coordinates the session model
//! and the deck builder. It is organized into submodules by
//! responsibility:
//!
//! - `refresh`: Mood selection and deck refresh
//! - `gestures`: Drag reporting and front-card decisions

mod gestures;
mod refresh;

use std::sync::Arc;

use crate::error::{ProviderError, RefreshError};
use crate::model::{DeckBuilder, SessionModel};

#[derive(Clone)]
pub struct DeckController {
    pub(crate) model: Arc<SessionModel>,
    pub(crate) builder: DeckBuilder,
}

impl DeckController {
    pub fn new(model: Arc<SessionModel>, builder: DeckBuilder) -> Self {
        Self { model, builder }
    }

    pub(crate) fn format_error(error: &RefreshError) -> String {
        let source = match error {
            RefreshError::Artworks(_) => "artwork",
            RefreshError::Poems(_) => "poem",
        };

        match error.provider_error() {
            ProviderError::Status(429) => {
                format!("The {} source is rate limiting us. Wait a moment and retry.", source)
            }
            ProviderError::Status(code) => {
                format!("The {} source answered with status {}. Try again.", source, code)
            }
            ProviderError::Network(_) => {
                format!("Could not reach the {} source. Check your connection.", source)
            }
            ProviderError::Decode(_) => {
                format!("The {} source sent an unreadable response.", source)
            }
            ProviderError::InvalidUrl(_) => {
                format!("That mood cannot be searched against the {} source.", source)
            }
        }
    }
}
