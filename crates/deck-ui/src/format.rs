//! Display labels for card fields. Every helper renders the placeholder
//! dash when its value is unavailable.

use deck_types::{clamp_percent, PLACEHOLDER};

pub fn count_label(value: Option<u64>) -> String {
    value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string())
}

pub fn streak_label(days: Option<u64>) -> String {
    match days {
        Some(1) => "1 day".to_string(),
        Some(n) => format!("{n} days"),
        None => PLACEHOLDER.to_string(),
    }
}

/// Accuracy as text, clamped the same way as the progress bar.
pub fn accuracy_label(accuracy: Option<i64>) -> String {
    accuracy.map_or_else(
        || PLACEHOLDER.to_string(),
        |pct| format!("{}%", clamp_percent(pct)),
    )
}

/// Width of the accuracy fill. Unavailable accuracy draws an empty bar.
pub fn fill_percent(accuracy: Option<i64>) -> u8 {
    accuracy.map(clamp_percent).unwrap_or(0)
}

pub fn verse_count_label(count: Option<u64>) -> String {
    count.map_or_else(|| PLACEHOLDER.to_string(), |n| format!("{n}v"))
}

pub fn rank_label(rank: Option<u64>) -> String {
    rank.map_or_else(|| PLACEHOLDER.to_string(), |n| format!("#{n}"))
}

pub fn points_label(delta: Option<&str>) -> String {
    delta.map_or_else(|| PLACEHOLDER.to_string(), |d| format!("{d} pts"))
}

pub fn text_label(text: Option<&str>) -> String {
    text.unwrap_or(PLACEHOLDER).to_string()
}

/// CSS modifier for a signed label: `up`, `down` or `flat`.
pub fn delta_tone(delta: Option<&str>) -> &'static str {
    let Some(delta) = delta.map(str::trim) else {
        return "flat";
    };

    if delta.starts_with('-') || delta.starts_with('\u{2212}') {
        "down"
    } else if delta.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "up"
    } else {
        "flat"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_stats_labels() {
        assert_eq!(count_label(Some(247)), "247");
        assert_eq!(streak_label(Some(12)), "12 days");
        assert_eq!(accuracy_label(Some(94)), "94%");
        assert_eq!(fill_percent(Some(94)), 94);
    }

    #[test]
    fn test_accuracy_clamped_for_width() {
        assert_eq!(fill_percent(Some(150)), 100);
        assert_eq!(fill_percent(Some(-5)), 0);
        assert_eq!(fill_percent(None), 0);
        assert_eq!(accuracy_label(Some(150)), "100%");
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(count_label(None), PLACEHOLDER);
        assert_eq!(streak_label(None), PLACEHOLDER);
        assert_eq!(accuracy_label(None), PLACEHOLDER);
        assert_eq!(verse_count_label(None), PLACEHOLDER);
        assert_eq!(rank_label(None), PLACEHOLDER);
        assert_eq!(points_label(None), PLACEHOLDER);
        assert_eq!(text_label(None), PLACEHOLDER);
    }

    #[test]
    fn test_suffixes() {
        assert_eq!(streak_label(Some(1)), "1 day");
        assert_eq!(verse_count_label(Some(12)), "12v");
        assert_eq!(rank_label(Some(2)), "#2");
        assert_eq!(points_label(Some("+150")), "+150 pts");
    }

    #[test]
    fn test_delta_tone() {
        assert_eq!(delta_tone(Some("+8%")), "up");
        assert_eq!(delta_tone(Some("-40")), "down");
        assert_eq!(delta_tone(Some("0%")), "flat");
        assert_eq!(delta_tone(None), "flat");
    }
}
