//! Content items fetched from the two sources and the cards that wrap them

use serde::Deserialize;
use uuid::Uuid;

const IIIF_IMAGE_BASE: &str = "https://www.artic.edu/iiif/2";
const IIIF_RENDITION: &str = "full/843,/0/default.jpg";

/// A visual work returned by the artwork search API.
///
/// Source ids may repeat across distinct queries; they are not used as
/// deck identity (see [`Card`]).
#[derive(Debug, Clone, Deserialize)]
pub struct Artwork {
    pub id: i64,
    pub title: String,
    pub artist_display: Option<String>,
    pub image_id: Option<String>,
}

impl Artwork {
    /// Full IIIF asset URL at the fixed rendition size, when the record
    /// carries an image reference.
    pub fn image_url(&self) -> Option<String> {
        self.image_id
            .as_ref()
            .map(|image_id| format!("{}/{}/{}", IIIF_IMAGE_BASE, image_id, IIIF_RENDITION))
    }
}

/// A poem returned by the line-search API.
///
/// The source has no stable numeric id, so a poem's identity is its
/// title. Two distinct poems sharing a title collide; kept as a
/// documented limitation of the source.
#[derive(Debug, Clone, Deserialize)]
pub struct Poem {
    pub title: String,
    pub author: String,
    pub lines: Vec<String>,
}

/// Exactly one fetched content item, enforced at construction.
#[derive(Debug, Clone)]
pub enum ContentItem {
    Art(Artwork),
    Poem(Poem),
}

impl ContentItem {
    pub fn title(&self) -> &str {
        match self {
            ContentItem::Art(artwork) => &artwork.title,
            ContentItem::Poem(poem) => &poem.title,
        }
    }

    /// Artist or author line, when the source provides one.
    pub fn attribution(&self) -> Option<&str> {
        match self {
            ContentItem::Art(artwork) => artwork.artist_display.as_deref(),
            ContentItem::Poem(poem) => Some(&poem.author),
        }
    }

    pub fn is_art(&self) -> bool {
        matches!(self, ContentItem::Art(_))
    }

    pub fn is_poem(&self) -> bool {
        matches!(self, ContentItem::Poem(_))
    }
}

/// A deck entry wrapping one content item.
///
/// Identity is the card id generated here, not the wrapped content's id.
#[derive(Debug, Clone)]
pub struct Card {
    pub id: Uuid,
    pub content: ContentItem,
}

impl Card {
    pub fn new(content: ContentItem) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
        }
    }
}
