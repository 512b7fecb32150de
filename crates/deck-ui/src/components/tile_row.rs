use leptos::prelude::*;

/// Label on the left, value on the right.
#[component]
pub fn TileRow(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="tile-row">
            <span class="tile-row-label">{label}</span>
            <span class="tile-row-value">{children()}</span>
        </div>
    }
}
