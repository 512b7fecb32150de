#![allow(non_snake_case)]

pub mod error;
pub mod file;
pub mod fixture;

use std::future::Future;
use std::path::PathBuf;

use deck_types::Deck;
use serde::Deserialize;

pub use error::ProviderError;
pub use file::FileProvider;
pub use fixture::FixtureProvider;

/// Source of the cards a deck renders.
pub trait DeckProvider {
    fn load(&self) -> impl Future<Output = Result<Deck, ProviderError>> + Send;
}

/// Config-selected provider. Without a path the sample deck is served.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(from = "Option<PathBuf>")]
pub enum DeckSource {
    #[default]
    Fixture,
    File(PathBuf),
}

impl From<Option<PathBuf>> for DeckSource {
    fn from(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => DeckSource::File(path),
            None => DeckSource::Fixture,
        }
    }
}

impl DeckProvider for DeckSource {
    async fn load(&self) -> Result<Deck, ProviderError> {
        match self {
            DeckSource::Fixture => FixtureProvider.load().await,
            DeckSource::File(path) => FileProvider::new(path.clone()).load().await,
        }
    }
}
