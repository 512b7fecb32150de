use deck_types::{
    AccentColor, Card, CardPayload, Deck, StatsPayload, TeamsPayload, ThemeEntry,
};

use crate::{DeckProvider, ProviderError};

/// The built-in sample deck: stats, themes, teams.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixtureProvider;

impl DeckProvider for FixtureProvider {
    async fn load(&self) -> Result<Deck, ProviderError> {
        Ok(sample_deck())
    }
}

pub fn sample_deck() -> Deck {
    Deck::from_cards(vec![sample_stats(), sample_themes(), sample_teams()])
}

fn sample_stats() -> Card {
    Card {
        title: "Practice Stats".into(),
        badge: None,
        accent_color: AccentColor::Blue,
        payload: CardPayload::Stats(StatsPayload {
            verses_learned: Some(247),
            current_streak: Some(12),
            accuracy: Some(94),
            trend: Some("+8%".into()),
        }),
    }
}

fn sample_themes() -> Card {
    let theme = |name: &str, verseCount: u64| ThemeEntry {
        name: Some(name.into()),
        verse_count: Some(verseCount),
    };

    Card {
        title: "Recommended Themes".into(),
        badge: Some("New".into()),
        accent_color: AccentColor::Purple,
        payload: CardPayload::Themes(vec![
            theme("Faith", 12),
            theme("Peace", 8),
            theme("Love", 15),
        ]),
    }
}

fn sample_teams() -> Card {
    Card {
        title: "Team Activity".into(),
        badge: None,
        accent_color: AccentColor::Green,
        payload: CardPayload::Teams(TeamsPayload {
            active_challenges: Some(3),
            leaderboard_rank: Some(2),
            team_name: Some("Morning Disciples".into()),
            recent_points_delta: Some("+150".into()),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use deck_types::CardKind;

    #[tokio::test]
    async fn test_sample_deck_order() {
        let deck = FixtureProvider.load().await.unwrap();
        let kinds: Vec<CardKind> = deck.cards().map(Card::kind).collect();
        assert_eq!(kinds, vec![CardKind::Stats, CardKind::Themes, CardKind::Teams]);
        assert!(deck.slots.iter().all(|slot| slot.is_ready()));
    }

    #[test]
    fn test_only_themes_carries_a_badge() {
        let deck = sample_deck();
        let badges: Vec<Option<&str>> = deck.cards().map(|c| c.badge.as_deref()).collect();
        assert_eq!(badges, vec![None, Some("New"), None]);
    }

    #[test]
    fn test_sample_stats_values() {
        let deck = sample_deck();
        let Some(CardPayload::Stats(stats)) = deck.cards().next().map(|c| &c.payload) else {
            panic!("first card should be stats");
        };
        assert_eq!(stats.verses_learned, Some(247));
        assert_eq!(stats.current_streak, Some(12));
        assert_eq!(stats.accuracy_pct(), Some(94));
        assert_eq!(stats.trend.as_deref(), Some("+8%"));
    }
}
