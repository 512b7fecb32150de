use std::path::{Path, PathBuf};

use deck_types::{Deck, DeckSlot};
use serde_json::Value;
use tracing::{debug, warn};

use crate::{DeckProvider, ProviderError};

/// Reads a deck from a JSON file holding either a list of card records or an
/// object with a `cards` list.
#[derive(Clone, Debug)]
pub struct FileProvider {
    path: PathBuf,
}

impl FileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DeckProvider for FileProvider {
    async fn load(&self) -> Result<Deck, ProviderError> {
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|source| ProviderError::Read {
                path: self.path.clone(),
                source,
            })?;

        let document: Value =
            serde_json::from_str(&contents).map_err(|source| ProviderError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let records = card_records(&document).ok_or_else(|| ProviderError::NotAList {
            path: self.path.clone(),
        })?;

        let deck = Deck::from_values(records);
        for (index, slot) in deck.slots.iter().enumerate() {
            if let DeckSlot::Unavailable { reason, .. } = slot {
                warn!("card {index} in {} is unavailable: {reason}", self.path.display());
            }
        }
        debug!("loaded {} cards from {}", deck.len(), self.path.display());

        Ok(deck)
    }
}

fn card_records(document: &Value) -> Option<&[Value]> {
    match document {
        Value::Array(records) => Some(records),
        Value::Object(fields) => fields.get("cards")?.as_array().map(Vec::as_slice),
        _ => None,
    }
}
