use deck_types::{Card, CardPayload, PLACEHOLDER};
use leptos::prelude::*;

use crate::components::badge::Badge;
use crate::components::glyph::{Glyph, Icon};
use crate::components::motion::{entrance_style, tile_delay};
use crate::components::stats_body::StatsBody;
use crate::components::teams_body::TeamsBody;
use crate::components::themes_body::ThemesBody;

/// One card of the deck.
///
/// Entrance is staggered by `index`. Hover lift, glow, icon spin and the
/// arrow affordance are driven from CSS on the `.tile` element.
#[component]
pub fn Tile(card: Card, index: usize) -> impl IntoView {
    let kind = card.kind();
    let accent = card.accent_color;

    let body = match card.payload {
        CardPayload::Stats(stats) => view! { <StatsBody stats=stats index=index /> }.into_any(),
        CardPayload::Themes(themes) => view! { <ThemesBody themes=themes index=index /> }.into_any(),
        CardPayload::Teams(teams) => view! { <TeamsBody teams=teams /> }.into_any(),
    };

    view! {
        <article
            class=format!("tile tile-{} {}", kind.as_str(), accent.css_class())
            style=entrance_style(tile_delay(index))
        >
            <div class="tile-glow"></div>
            {card.badge.map(|label| view! { <Badge label=label /> })}
            <header class="tile-header">
                <div class="tile-swatch">
                    <Icon glyph=Glyph::for_kind(kind) />
                </div>
                <h3 class="tile-title">{card.title}</h3>
                <span class="tile-affordance">
                    <Icon glyph=Glyph::Arrow />
                </span>
            </header>
            <div class="tile-body">{body}</div>
        </article>
    }
}

/// Stands in for a card that could not be interpreted.
#[component]
pub fn UnavailableTile(title: Option<String>, reason: String, index: usize) -> impl IntoView {
    view! {
        <article
            class="tile tile-unavailable accent-neutral"
            style=entrance_style(tile_delay(index))
            title=reason
        >
            <header class="tile-header">
                <h3 class="tile-title">{title.unwrap_or_else(|| PLACEHOLDER.to_string())}</h3>
            </header>
            <div class="tile-body">
                <p class="tile-unavailable-note">"Unavailable"</p>
            </div>
        </article>
    }
}
