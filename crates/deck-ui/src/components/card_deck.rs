use deck_types::DeckSlot;
use leptos::prelude::*;

use crate::components::tile::{Tile, UnavailableTile};

/// Row of equally sized tiles, one per slot, in input order.
#[component]
pub fn CardDeck(slots: Vec<DeckSlot>) -> impl IntoView {
    if slots.is_empty() {
        return view! {
            <div class="card-deck-empty">"No practice cards yet."</div>
        }
            .into_any();
    }

    let tiles = slots
        .into_iter()
        .enumerate()
        .map(|(index, slot)| match slot {
            DeckSlot::Ready { card } => view! { <Tile card=card index=index /> }.into_any(),
            DeckSlot::Unavailable { title, reason } => {
                view! { <UnavailableTile title=title reason=reason index=index /> }.into_any()
            }
        })
        .collect_view();

    view! {
        <section class="card-deck">{tiles}</section>
    }
        .into_any()
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use deck_providers::fixture::sample_deck;
    use deck_types::{AccentColor, Card, CardPayload, Deck, StatsPayload, PLACEHOLDER};
    use serde_json::json;
    use leptos::tachys::view::RenderHtml;

    fn render(slots: Vec<DeckSlot>) -> String {
        Owner::new().with(|| view! { <CardDeck slots=slots /> }.to_html())
    }

    fn stats_card(accuracy: i64) -> Card {
        Card {
            title: "Practice Stats".into(),
            badge: None,
            accent_color: AccentColor::Blue,
            payload: CardPayload::Stats(StatsPayload {
                verses_learned: Some(1),
                current_streak: Some(1),
                accuracy: Some(accuracy),
                trend: Some("+1%".into()),
            }),
        }
    }

    #[test]
    fn test_sample_stats_tile() {
        let html = render(sample_deck().slots);
        assert!(html.contains("247"));
        assert!(html.contains("12 days"));
        assert!(html.contains("94%"));
        assert!(html.contains("+8%"));
        assert!(html.contains("width: 94%"));
    }

    #[test]
    fn test_sample_themes_rows() {
        let html = render(sample_deck().slots);
        assert_eq!(html.matches("class=\"theme-row\"").count(), 3);
        for (name, count) in [("Faith", "12v"), ("Peace", "8v"), ("Love", "15v")] {
            assert!(html.contains(name));
            assert!(html.contains(count));
        }
    }

    #[test]
    fn test_tiles_keep_input_order() {
        let html = render(sample_deck().slots);
        let stats = html.find("tile-stats").unwrap();
        let themes = html.find("tile-themes").unwrap();
        let teams = html.find("tile-teams").unwrap();
        assert!(stats < themes && themes < teams);

        let mut reversed = sample_deck().slots;
        reversed.reverse();
        let html = render(reversed);
        assert!(html.find("tile-teams").unwrap() < html.find("tile-stats").unwrap());
    }

    #[test]
    fn test_badge_only_when_present() {
        let html = render(sample_deck().slots);
        assert_eq!(html.matches("class=\"tile-badge\"").count(), 1);

        let html = render(vec![stats_card(50).into()]);
        assert!(!html.contains("tile-badge"));
    }

    #[test]
    fn test_accuracy_width_is_clamped() {
        let html = render(vec![stats_card(150).into()]);
        assert!(html.contains("width: 100%"));

        let html = render(vec![stats_card(-5).into()]);
        assert!(html.contains("width: 0%"));
    }

    #[test]
    fn test_unavailable_slot_renders_in_place() {
        let html = render(vec![
            stats_card(80).into(),
            DeckSlot::Unavailable {
                title: Some("Calendar".into()),
                reason: "unknown card kind `calendar`".into(),
            },
        ]);
        assert!(html.contains("tile-unavailable"));
        assert!(html.contains("Calendar"));
        assert!(html.find("tile-stats").unwrap() < html.find("tile-unavailable").unwrap());
    }

    fn tile_markup(html: &str, kind: &str) -> String {
        let start = html.find(&format!("tile-{kind}")).unwrap();
        let end = html[start..]
            .find("</article>")
            .map(|offset| start + offset)
            .unwrap_or(html.len());
        html[start..end].to_string()
    }

    #[test]
    fn test_sample_teams_tile() {
        let html = render(sample_deck().slots);
        let teams = tile_markup(&html, "teams");

        assert!(teams.contains("team-challenges"));
        assert!(teams.contains("3"));
        assert!(teams.contains("#2"));
        assert!(teams.contains("Morning Disciples"));
        assert!(teams.contains("+150 pts"));
        assert!(teams.contains("glyph-trophy"));
        assert!(teams.contains("glyph-award"));
    }

    #[test]
    fn test_tiles_render_only_their_own_fields() {
        let html = render(sample_deck().slots);

        let stats = tile_markup(&html, "stats");
        assert!(stats.contains("progress-track"));
        assert!(!stats.contains("theme-row"));
        assert!(!stats.contains("team-footer"));

        let themes = tile_markup(&html, "themes");
        assert!(themes.contains("tile-cta"));
        assert!(!themes.contains("progress-track"));
        assert!(!themes.contains("team-footer"));

        let teams = tile_markup(&html, "teams");
        assert!(teams.contains("team-footer"));
        assert!(!teams.contains("progress-track"));
        assert!(!teams.contains("theme-row"));
    }

    #[test]
    fn test_malformed_fields_render_placeholder_in_tile() {
        let deck = Deck::from_values(&[
            json!({ "kind": "stats", "payload": { "versesLearned": -1, "accuracy": "x" } }),
            json!({ "kind": "teams", "payload": { "leaderboardRank": 0 } }),
        ]);
        let html = render(deck.slots);

        let stats = tile_markup(&html, "stats");
        assert!(stats.contains(&format!("stat-learned\">{PLACEHOLDER}")));
        assert!(stats.contains(&format!("stat-accuracy\">{PLACEHOLDER}")));
        assert!(stats.contains("width: 0%"));

        let teams = tile_markup(&html, "teams");
        let rank = &teams[teams.find("team-rank").unwrap()..];
        assert!(rank.contains(PLACEHOLDER));
        assert!(!teams.contains("tile-unavailable"));
    }

    #[test]
    fn test_empty_deck() {
        let html = render(Vec::new());
        assert!(html.contains("No practice cards yet."));
        assert!(!html.contains("class=\"tile "));
    }
}
