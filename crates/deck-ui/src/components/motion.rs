//! Animation timing for tiles and their children.
//!
//! The tweens themselves live in `style/main.css`; these functions only
//! decide when each one starts, as a function of position.

use std::time::Duration;

/// Delay added per tile, left to right.
pub const TILE_STAGGER: Duration = Duration::from_millis(100);
/// Theme rows start this long after their tile.
pub const ROW_LEAD: Duration = Duration::from_millis(200);
/// Delay added per theme row.
pub const ROW_STAGGER: Duration = Duration::from_millis(100);
/// The accuracy bar starts filling once its tile has settled.
pub const FILL_LEAD: Duration = Duration::from_millis(500);

pub fn tile_delay(index: usize) -> Duration {
    TILE_STAGGER.saturating_mul(steps(index))
}

pub fn row_delay(tileIndex: usize, rowIndex: usize) -> Duration {
    tile_delay(tileIndex)
        .saturating_add(ROW_LEAD)
        .saturating_add(ROW_STAGGER.saturating_mul(steps(rowIndex)))
}

pub fn fill_delay(tileIndex: usize) -> Duration {
    tile_delay(tileIndex).saturating_add(FILL_LEAD)
}

/// CSS time value, e.g. `0.30s`.
pub fn css_seconds(delay: Duration) -> String {
    format!("{:.2}s", delay.as_secs_f64())
}

/// Inline style that schedules an element's entrance animation.
pub fn entrance_style(delay: Duration) -> String {
    format!("animation-delay: {}", css_seconds(delay))
}

fn steps(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_delay_is_linear() {
        assert_eq!(tile_delay(0), Duration::ZERO);
        assert_eq!(tile_delay(1), Duration::from_millis(100));
        assert_eq!(tile_delay(2), Duration::from_millis(200));
        assert_eq!(tile_delay(7) - tile_delay(6), TILE_STAGGER);
    }

    #[test]
    fn test_tile_delay_saturates() {
        assert_eq!(tile_delay(usize::MAX), TILE_STAGGER * u32::MAX);
        assert!(row_delay(usize::MAX, usize::MAX) >= tile_delay(usize::MAX));
    }

    #[test]
    fn test_row_delay_follows_tile() {
        assert_eq!(row_delay(0, 0), Duration::from_millis(200));
        assert_eq!(row_delay(1, 0), Duration::from_millis(300));
        assert_eq!(row_delay(1, 2), Duration::from_millis(500));
    }

    #[test]
    fn test_fill_delay_tracks_stagger() {
        assert_eq!(fill_delay(0), Duration::from_millis(500));
        assert_eq!(fill_delay(2) - fill_delay(1), TILE_STAGGER);
    }

    #[test]
    fn test_entrance_style() {
        assert_eq!(entrance_style(tile_delay(3)), "animation-delay: 0.30s");
        assert_eq!(css_seconds(Duration::ZERO), "0.00s");
    }
}
