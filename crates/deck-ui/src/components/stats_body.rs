use deck_types::StatsPayload;
use leptos::prelude::*;

use crate::components::glyph::{Glyph, Icon};
use crate::components::motion::fill_delay;
use crate::components::progress_bar::ProgressBar;
use crate::components::tile_row::TileRow;
use crate::format::{accuracy_label, count_label, delta_tone, fill_percent, streak_label, text_label};

#[component]
pub fn StatsBody(stats: StatsPayload, index: usize) -> impl IntoView {
    let trendTone = delta_tone(stats.trend.as_deref());
    let trendText = text_label(stats.trend.as_deref());

    view! {
        <div class="tile-rows">
            <TileRow label="Verses learned">
                <span class="stat-learned">{count_label(stats.verses_learned)}</span>
            </TileRow>
            <TileRow label="This week">
                <span class=format!("stat-trend trend-{trendTone}")>
                    <Icon glyph=Glyph::Trending />
                    {trendText}
                </span>
            </TileRow>
            <TileRow label="Current streak">
                <span class="stat-streak">
                    <Icon glyph=Glyph::Flame modifier="glyph-flicker" />
                    {streak_label(stats.current_streak)}
                </span>
            </TileRow>
            <TileRow label="Accuracy">
                <span class="stat-accuracy">{accuracy_label(stats.accuracy)}</span>
            </TileRow>
        </div>
        <ProgressBar percent=fill_percent(stats.accuracy) delay=fill_delay(index) />
    }
}
