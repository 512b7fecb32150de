//! Lenient interpretation of card records coming from an external source.
//!
//! A record only fails as a whole when its kind cannot be determined. Every
//! other problem is confined to the field it affects, which is left as `None`
//! and rendered as a placeholder.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::card::{
    AccentColor, Card, CardKind, CardPayload, StatsPayload, TeamsPayload, ThemeEntry,
};

#[derive(Debug, Error, PartialEq)]
pub enum CardError {
    #[error("card is not a JSON object")]
    NotAnObject,
    #[error("card has no kind")]
    MissingKind,
    #[error("unknown card kind `{0}`")]
    UnknownKind(String),
}

pub fn interpret_card(value: &Value) -> Result<Card, CardError> {
    let record = value.as_object().ok_or(CardError::NotAnObject)?;

    let rawKind = record
        .get("kind")
        .and_then(Value::as_str)
        .ok_or(CardError::MissingKind)?;
    let kind = CardKind::parse(rawKind).ok_or_else(|| CardError::UnknownKind(rawKind.to_string()))?;

    let emptyPayload = Value::Object(Map::new());
    let payload = record.get("payload").unwrap_or(&emptyPayload);

    let payload = match kind {
        CardKind::Stats => CardPayload::Stats(interpret_stats(payload)),
        CardKind::Themes => CardPayload::Themes(interpret_themes(payload)),
        CardKind::Teams => CardPayload::Teams(interpret_teams(payload)),
    };

    Ok(Card {
        title: text(record, "title").unwrap_or_else(|| kind.default_title().to_string()),
        badge: text(record, "badge"),
        accent_color: record
            .get("accentColor")
            .and_then(Value::as_str)
            .map(AccentColor::from)
            .unwrap_or_default(),
        payload,
    })
}

fn interpret_stats(payload: &Value) -> StatsPayload {
    let Some(fields) = payload.as_object() else {
        return StatsPayload::default();
    };

    StatsPayload {
        verses_learned: count(fields, "versesLearned"),
        current_streak: count(fields, "currentStreak"),
        accuracy: signed(fields, "accuracy"),
        trend: signed_label(fields, "trend", "%"),
    }
}

fn interpret_themes(payload: &Value) -> Vec<ThemeEntry> {
    let Some(entries) = payload.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .map(|entry| match entry.as_object() {
            Some(fields) => ThemeEntry {
                name: text(fields, "name"),
                verse_count: count(fields, "verseCount"),
            },
            None => ThemeEntry::default(),
        })
        .collect()
}

fn interpret_teams(payload: &Value) -> TeamsPayload {
    let Some(fields) = payload.as_object() else {
        return TeamsPayload::default();
    };

    TeamsPayload {
        active_challenges: count(fields, "activeChallenges"),
        leaderboard_rank: count(fields, "leaderboardRank").filter(|rank| *rank >= 1),
        team_name: text(fields, "teamName"),
        recent_points_delta: signed_label(fields, "recentPointsDelta", ""),
    }
}

/// Non-blank string, trimmed.
fn text(fields: &Map<String, Value>, key: &str) -> Option<String> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Non-negative whole number. Accepts numeric strings; `12.0` and `"12.0"`
/// both count, `12.5` does not.
fn count(fields: &Map<String, Value>, key: &str) -> Option<u64> {
    match fields.get(key)? {
        Value::Number(n) => n.as_u64().or_else(|| n.as_f64().and_then(whole_count)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<u64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().and_then(whole_count))
        }
        _ => None,
    }
}

fn whole_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0 && value.fract() == 0.0).then_some(value as u64)
}

/// Signed whole number, rounding fractions. Accepts strings like `"94%"`.
fn signed(fields: &Map<String, Value>, key: &str) -> Option<i64> {
    match fields.get(key)? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let trimmed = s.trim().trim_end_matches('%').trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().filter(|f| f.is_finite()).map(|f| f.round() as i64))
        }
        _ => None,
    }
}

/// Signed display label such as `"+8%"` or `"-20"`. Strings must carry a
/// number; unsigned ones (`"8%"`) get a `+` so both forms render alike.
fn signed_label(fields: &Map<String, Value>, key: &str, suffix: &str) -> Option<String> {
    match fields.get(key)? {
        Value::String(s) => {
            let trimmed = s.trim();
            if !trimmed.chars().any(|c| c.is_ascii_digit()) {
                return None;
            }
            if trimmed.starts_with(|c: char| c.is_ascii_digit()) {
                Some(format!("+{trimmed}"))
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(_) => signed(fields, key).map(|n| format!("{n:+}{suffix}")),
        _ => None,
    }
}
