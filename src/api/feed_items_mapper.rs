use serde::{Deserialize, Deserializer};
use thiserror::Error;
use url::Url;
use uuid::Uuid;

use crate::domain::FeedItem;

const OK_200: u16 = 200;

/// Why a response could not be decoded into feed items.
#[derive(Error, Debug)]
pub enum MapError {
    #[error("unexpected status code {0}")]
    UnexpectedStatus(u16),

    #[error("malformed feed payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

// Wire representation of the feed API. Kept apart from `FeedItem` so the
// API's field names stay out of the domain model.
#[derive(Debug, Deserialize)]
struct Root {
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(deserialize_with = "deserialize_hyphenated_uuid")]
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image: Url,
}

const HYPHENATED_UUID_LEN: usize = 36;

// Only the 8-4-4-4-12 form is a valid id on the wire; `Uuid`'s own
// deserializer would also take simple, braced and urn forms.
fn deserialize_hyphenated_uuid<'de, D>(deserializer: D) -> Result<Uuid, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de;

    let raw = String::deserialize(deserializer)?;
    if raw.len() != HYPHENATED_UUID_LEN {
        return Err(de::Error::custom(format!("expected a hyphenated UUID, got '{}'", raw)));
    }

    Uuid::try_parse(&raw).map_err(de::Error::custom)
}

impl From<Item> for FeedItem {
    fn from(item: Item) -> Self {
        FeedItem::new(item.id, item.image)
            .with_description(item.description)
            .with_location(item.location)
    }
}

pub struct FeedItemsMapper;

impl FeedItemsMapper {
    /// Decode a feed response. Anything but a 200 with a well-formed `items`
    /// payload is an error; a single bad item rejects the whole payload.
    pub fn map(status: u16, body: &[u8]) -> Result<Vec<FeedItem>, MapError> {
        if status != OK_200 {
            return Err(MapError::UnexpectedStatus(status));
        }

        let root: Root = serde_json::from_slice(body)?;
        Ok(root.items.into_iter().map(FeedItem::from).collect())
    }
}
