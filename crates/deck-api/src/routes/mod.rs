pub mod cards;

use axum::Router;

use crate::AppState;

pub fn api_routes() -> Router<AppState> {
    Router::new().merge(cards::routes())
}
