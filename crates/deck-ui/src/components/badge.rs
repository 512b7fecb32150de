use leptos::prelude::*;

use crate::components::glyph::{Glyph, Icon};

/// Pinned top-right overlay flagging a tile, e.g. "New".
///
/// The pulse and the spinning sparkles are pure decoration.
#[component]
pub fn Badge(label: String) -> impl IntoView {
    view! {
        <div class="tile-badge">
            <span class="tile-badge-pulse"></span>
            <span class="tile-badge-label">{label}</span>
            <Icon glyph=Glyph::Sparkles modifier="tile-badge-spark" />
        </div>
    }
}
