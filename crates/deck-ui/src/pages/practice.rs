use deck_types::Deck;
use leptos::prelude::*;

use crate::components::card_deck::CardDeck;

#[server]
async fn get_deck() -> Result<Deck, ServerFnError> {
    use deck_providers::{DeckProvider, DeckSource};

    let source = use_context::<DeckSource>().unwrap_or_default();
    source
        .load()
        .await
        .map_err(|e| ServerFnError::ServerError(e.to_string()))
}

#[component]
pub fn PracticePage() -> impl IntoView {
    // Loaded once per mount; cards are immutable for the lifetime of the view.
    #[allow(unused_variables)]
    let (deck, setDeck) = signal(Option::<Result<Deck, String>>::None);

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen_futures::spawn_local;

        spawn_local(async move {
            let result = get_deck().await.map_err(|e| e.to_string());
            setDeck.set(Some(result));
        });
    }

    view! {
        <div class="practice-header">
            <h1>"Your Practice"</h1>
            <p class="subtitle">"Progress, suggestions and team activity at a glance"</p>
        </div>
        {move || {
            match deck.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading practice cards..."
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(d)) => view! { <CardDeck slots=d.slots /> }.into_any(),
                Some(Err(e)) => {
                    view! {
                        <div class="card-deck-error">
                            <p>"Failed to load practice cards: " {e}</p>
                        </div>
                    }
                        .into_any()
                }
            }
        }}
    }
}
