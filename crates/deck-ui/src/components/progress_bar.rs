use std::time::Duration;

use leptos::prelude::*;

use crate::components::motion::css_seconds;

/// Horizontal bar whose fill grows from 0 to `percent` after `delay`.
///
/// `percent` is expected to be clamped already; it is clamped again so the
/// fill can never overflow the track.
#[component]
pub fn ProgressBar(percent: u8, delay: Duration) -> impl IntoView {
    let clampedPercent = percent.min(100);

    // Final width is set inline; the keyframes only animate towards it.
    let fillStyle = format!(
        "width: {clampedPercent}%; --fill: {clampedPercent}%; animation-delay: {}",
        css_seconds(delay)
    );

    view! {
        <div
            class="progress-track"
            role="progressbar"
            aria-valuemin="0"
            aria-valuemax="100"
            aria-valuenow=clampedPercent.to_string()
        >
            <div class="progress-fill" style=fillStyle></div>
        </div>
    }
}
