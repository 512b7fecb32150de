use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use deck_providers::DeckProvider;
use deck_types::Deck;
use http::StatusCode;
use serde::Serialize;
use tracing::warn;

use crate::AppState;

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/v1/cards", get(get_cards))
        .route("/api/v1/cards/:index", get(get_card))
}

async fn load_deck(state: &AppState) -> Result<Deck, Response> {
    state.source.load().await.map_err(|e| {
        warn!("deck unavailable: {e}");
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(ErrorResponse {
                error: e.to_string(),
            }),
        )
            .into_response()
    })
}

async fn get_cards(State(state): State<AppState>) -> Response {
    match load_deck(&state).await {
        Ok(deck) => Json(deck).into_response(),
        Err(response) => response,
    }
}

async fn get_card(State(state): State<AppState>, Path(index): Path<usize>) -> Response {
    let deck = match load_deck(&state).await {
        Ok(deck) => deck,
        Err(response) => return response,
    };

    match deck.slots.into_iter().nth(index) {
        Some(slot) => Json(slot).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("no card at position {index}"),
            }),
        )
            .into_response(),
    }
}
