use deck_types::CardKind;
use leptos::prelude::*;

/// Named glyphs used across the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Glyph {
    Target,
    Book,
    Users,
    Flame,
    Trophy,
    Award,
    Sparkles,
    Arrow,
    Trending,
    Chevron,
    Bullet,
}

impl Glyph {
    /// Header icon for a card kind.
    pub fn for_kind(kind: CardKind) -> Self {
        match kind {
            CardKind::Stats => Glyph::Target,
            CardKind::Themes => Glyph::Book,
            CardKind::Teams => Glyph::Users,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Glyph::Target => "target",
            Glyph::Book => "book",
            Glyph::Users => "users",
            Glyph::Flame => "flame",
            Glyph::Trophy => "trophy",
            Glyph::Award => "award",
            Glyph::Sparkles => "sparkles",
            Glyph::Arrow => "arrow",
            Glyph::Trending => "trending",
            Glyph::Chevron => "chevron",
            Glyph::Bullet => "bullet",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Glyph::Target => "\u{25CE}",
            Glyph::Book => "\u{1F4D6}",
            Glyph::Users => "\u{1F465}",
            Glyph::Flame => "\u{1F525}",
            Glyph::Trophy => "\u{1F3C6}",
            Glyph::Award => "\u{1F3C5}",
            Glyph::Sparkles => "\u{2728}",
            Glyph::Arrow => "\u{2192}",
            Glyph::Trending => "\u{2197}",
            Glyph::Chevron => "\u{203A}",
            Glyph::Bullet => "\u{2022}",
        }
    }
}

#[component]
pub fn Icon(
    glyph: Glyph,
    /// Extra class, e.g. an animation hook
    #[prop(optional)]
    modifier: &'static str,
) -> impl IntoView {
    let classes = if modifier.is_empty() {
        format!("glyph glyph-{}", glyph.name())
    } else {
        format!("glyph glyph-{} {modifier}", glyph.name())
    };

    view! {
        <span class=classes aria-hidden="true">
            {glyph.symbol()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_kind_has_its_own_icon() {
        let icons = [
            Glyph::for_kind(CardKind::Stats),
            Glyph::for_kind(CardKind::Themes),
            Glyph::for_kind(CardKind::Teams),
        ];
        assert_ne!(icons[0], icons[1]);
        assert_ne!(icons[1], icons[2]);
        assert_ne!(icons[0], icons[2]);
    }
}
