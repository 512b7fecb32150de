#![allow(non_snake_case)]

pub mod routes;

use axum::Router;
use deck_providers::DeckSource;

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub source: DeckSource,
}

pub fn api_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .with_state(state)
}
