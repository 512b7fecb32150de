use deck_types::{ThemeEntry, PLACEHOLDER};
use leptos::prelude::*;

use crate::components::glyph::{Glyph, Icon};
use crate::components::motion::{entrance_style, row_delay};
use crate::format::{text_label, verse_count_label};

#[component]
pub fn ThemesBody(themes: Vec<ThemeEntry>, index: usize) -> impl IntoView {
    let rows = if themes.is_empty() {
        view! {
            <li class="theme-row theme-row-empty">{PLACEHOLDER}</li>
        }
            .into_any()
    } else {
        themes
            .into_iter()
            .enumerate()
            .map(|(row, theme)| {
                view! {
                    <li class="theme-row" style=entrance_style(row_delay(index, row))>
                        <Icon glyph=Glyph::Bullet />
                        <span class="theme-name">{text_label(theme.name.as_deref())}</span>
                        <span class="theme-count">{verse_count_label(theme.verse_count)}</span>
                    </li>
                }
            })
            .collect_view()
            .into_any()
    };

    view! {
        <ul class="theme-list">{rows}</ul>
        // Not wired to any route yet.
        <button class="tile-cta" type="button">
            "Browse more themes"
            <Icon glyph=Glyph::Chevron />
        </button>
    }
}
