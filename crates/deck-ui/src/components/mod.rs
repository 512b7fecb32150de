pub mod badge;
pub mod card_deck;
pub mod glyph;
pub mod motion;
pub mod progress_bar;
pub mod stats_body;
pub mod teams_body;
pub mod themes_body;
pub mod tile;
pub mod tile_row;
