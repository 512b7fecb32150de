use serde::{Deserialize, Serialize};

/// Shown in place of any value that is missing or malformed.
pub const PLACEHOLDER: &str = "\u{2014}";

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Stats,
    Themes,
    Teams,
}

impl CardKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "stats" => Some(CardKind::Stats),
            "themes" => Some(CardKind::Themes),
            "teams" => Some(CardKind::Teams),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Stats => "stats",
            CardKind::Themes => "themes",
            CardKind::Teams => "teams",
        }
    }

    /// Title used when a card arrives without one.
    pub fn default_title(&self) -> &'static str {
        match self {
            CardKind::Stats => "Practice Stats",
            CardKind::Themes => "Recommended Themes",
            CardKind::Teams => "Team Activity",
        }
    }
}

/// Semantic colour token driving a tile's icon tint and hover glow.
///
/// Unknown tokens collapse to `Neutral` instead of failing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", into = "String")]
pub enum AccentColor {
    Blue,
    Purple,
    Green,
    #[default]
    Neutral,
}

impl AccentColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
            AccentColor::Green => "green",
            AccentColor::Neutral => "neutral",
        }
    }

    pub fn css_class(&self) -> &'static str {
        match self {
            AccentColor::Blue => "accent-blue",
            AccentColor::Purple => "accent-purple",
            AccentColor::Green => "accent-green",
            AccentColor::Neutral => "accent-neutral",
        }
    }
}

impl From<&str> for AccentColor {
    fn from(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "blue" => AccentColor::Blue,
            "purple" => AccentColor::Purple,
            "green" => AccentColor::Green,
            _ => AccentColor::Neutral,
        }
    }
}

impl From<String> for AccentColor {
    fn from(raw: String) -> Self {
        AccentColor::from(raw.as_str())
    }
}

impl From<AccentColor> for String {
    fn from(color: AccentColor) -> Self {
        color.as_str().to_string()
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    #[serde(default)]
    pub accent_color: AccentColor,
    pub payload: CardPayload,
}

impl Card {
    pub fn kind(&self) -> CardKind {
        self.payload.kind()
    }
}

/// Variant-specific body of a card. The variant is the card's kind.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum CardPayload {
    Stats(StatsPayload),
    Themes(Vec<ThemeEntry>),
    Teams(TeamsPayload),
}

impl CardPayload {
    pub fn kind(&self) -> CardKind {
        match self {
            CardPayload::Stats(_) => CardKind::Stats,
            CardPayload::Themes(_) => CardKind::Themes,
            CardPayload::Teams(_) => CardKind::Teams,
        }
    }
}

/// `None` in any field means the value was missing or malformed.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct StatsPayload {
    pub verses_learned: Option<u64>,
    /// Days.
    pub current_streak: Option<u64>,
    /// Raw percentage, not yet clamped.
    pub accuracy: Option<i64>,
    pub trend: Option<String>,
}

impl StatsPayload {
    /// Accuracy clamped into 0..=100, ready to be used as a width.
    pub fn accuracy_pct(&self) -> Option<u8> {
        self.accuracy.map(clamp_percent)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ThemeEntry {
    pub name: Option<String>,
    pub verse_count: Option<u64>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TeamsPayload {
    pub active_challenges: Option<u64>,
    /// Always >= 1 when present.
    pub leaderboard_rank: Option<u64>,
    pub team_name: Option<String>,
    pub recent_points_delta: Option<String>,
}

pub fn clamp_percent(value: i64) -> u8 {
    value.clamp(0, 100) as u8
}
