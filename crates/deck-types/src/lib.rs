#![allow(non_snake_case)]

pub mod card;
pub mod deck;
pub mod parse;

pub use card::*;
pub use deck::*;
pub use parse::{interpret_card, CardError};
