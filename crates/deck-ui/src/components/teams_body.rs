use deck_types::TeamsPayload;
use leptos::prelude::*;

use crate::components::glyph::{Glyph, Icon};
use crate::components::tile_row::TileRow;
use crate::format::{count_label, delta_tone, points_label, rank_label, text_label};

#[component]
pub fn TeamsBody(teams: TeamsPayload) -> impl IntoView {
    let deltaTone = delta_tone(teams.recent_points_delta.as_deref());

    view! {
        <div class="tile-rows">
            <TileRow label="Active challenges">
                <span class="team-challenges">
                    <Icon glyph=Glyph::Trophy />
                    {count_label(teams.active_challenges)}
                </span>
            </TileRow>
            <TileRow label="Leaderboard rank">
                <span class="team-rank">
                    <Icon glyph=Glyph::Award />
                    {rank_label(teams.leaderboard_rank)}
                </span>
            </TileRow>
        </div>
        <div class="team-footer">
            <span class="team-name">{text_label(teams.team_name.as_deref())}</span>
            <span class=format!("team-delta trend-{deltaTone}")>
                {points_label(teams.recent_points_delta.as_deref())}
            </span>
        </div>
    }
}
