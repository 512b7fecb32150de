use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::card::Card;
use crate::parse::interpret_card;

/// One position in the deck. A card that could not be interpreted keeps its
/// position as an unavailable slot so the rest of the deck still renders.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DeckSlot {
    Ready {
        card: Card,
    },
    Unavailable {
        title: Option<String>,
        reason: String,
    },
}

impl DeckSlot {
    /// Interpret one raw record, isolating any failure to this slot.
    pub fn from_value(value: &Value) -> Self {
        match interpret_card(value) {
            Ok(card) => DeckSlot::Ready { card },
            Err(e) => DeckSlot::Unavailable {
                title: value
                    .get("title")
                    .and_then(Value::as_str)
                    .map(str::trim)
                    .filter(|t| !t.is_empty())
                    .map(str::to_string),
                reason: e.to_string(),
            },
        }
    }

    pub fn card(&self) -> Option<&Card> {
        match self {
            DeckSlot::Ready { card } => Some(card),
            DeckSlot::Unavailable { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.card().is_some()
    }
}

impl From<Card> for DeckSlot {
    fn from(card: Card) -> Self {
        DeckSlot::Ready { card }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Deck {
    pub slots: Vec<DeckSlot>,
}

impl Deck {
    pub fn new(slots: Vec<DeckSlot>) -> Self {
        Self { slots }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self {
            slots: cards.into_iter().map(DeckSlot::from).collect(),
        }
    }

    pub fn from_values(values: &[Value]) -> Self {
        Self {
            slots: values.iter().map(DeckSlot::from_value).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.slots.iter().filter_map(DeckSlot::card)
    }
}
