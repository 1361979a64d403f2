//! Inline SVG glyphs.
//!
//! Glyphs are drawn on a 24×24 grid. Filled glyphs go through [`Icon`],
//! stroked ones through [`StrokeIcon`]. Multi-part glyphs are stored as a
//! single path with several subpaths.

use leptos::prelude::*;

use crate::catalog::FeatureIcon;

/// Renders a filled inline SVG icon from a path data string.
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon path=ICON_APP_STORE size="28" class="text-white" /> }
/// ```
#[component]
pub fn Icon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            viewBox="0 0 24 24"
            aria-hidden="true"
            class=class
        >
            <path d=path fill="currentColor"></path>
        </svg>
    }
}

/// Renders a stroked (outline) inline SVG icon.
#[component]
pub fn StrokeIcon(
    /// SVG path data (the `d` attribute value)
    path: &'static str,
    /// Icon size in pixels
    #[prop(default = "24")]
    size: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="none"
            viewBox="0 0 24 24"
            aria-hidden="true"
        >
            <path
                d=path
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
            ></path>
        </svg>
    }
}

/// Glyph for a feature card.
///
/// The match is exhaustive over [`FeatureIcon`]: adding a variant without a
/// glyph does not compile.
#[component]
pub fn FeatureGlyph(
    /// Feature icon to draw
    icon: FeatureIcon,
) -> impl IntoView {
    match icon {
        FeatureIcon::BarChart => view! { <StrokeIcon path=ICON_BAR_CHART /> }.into_any(),
        FeatureIcon::TrendingUp => view! { <StrokeIcon path=ICON_TRENDING_UP /> }.into_any(),
        FeatureIcon::Sparkles => view! { <Icon path=ICON_SPARKLES /> }.into_any(),
    }
}

// =============================================================================
// Feature glyphs
// =============================================================================

/// Three vertical bars of rising height
pub const ICON_BAR_CHART: &str = "M5 20V10M12 20V6M19 20v-8";

/// Zig-zag trend line with arrow head
pub const ICON_TRENDING_UP: &str = "M3 17 10 10l4 4 7-7M14 7h7v7";

/// Large and small four-pointed stars
pub const ICON_SPARKLES: &str = "M12 3l1.5 3.5L17 8l-3.5 1.5L12 13l-1.5-3.5L7 8l3.5-1.5L12 3ZM19 14l.9 2.1L22 17l-2.1.9L19 20l-.9-2.1L16 17l2.1-.9L19 14Z";

// =============================================================================
// Store glyphs
// =============================================================================

/// Apple-style logo
pub const ICON_APP_STORE: &str = "M12 2c1.5 0 2.4.6 3.3 1.5.9.9 1.2 2.1 1.2 3.4 0 1.4-.7 2.7-1.5 3.5-.8.8-1.9 1.6-3 1.6-1.1 0-2.3-.8-3.1-1.6-.8-.8-1.4-2.1-1.4-3.5 0-1.3.5-2.5 1.4-3.4C9.9 2.6 10.7 2 12 2ZM4.5 20c.5 1 1.7 2 3 2 1.3 0 1.7-.6 3-.6s1.7.6 3 .6c1.3 0 2.4-1 2.9-2 .3-.6.6-1.5.6-2.6 0-1.9-.8-3.7-2.1-4.9-1-.9-2.2-1.5-3.5-1.5s-2.6.6-3.6 1.5C6.4 13.7 5.5 15.5 5.5 17.4c0 1.1.2 2 .5 2.6Z";

/// Play-triangle logo
pub const ICON_GOOGLE_PLAY: &str = "M3 4.5c0-.9.9-1.5 1.7-1.1l11.6 6.1-3.1 3.1L3 4.5ZM3 19.5c0 .9.9 1.5 1.7 1.1l8.5-4.5-2.9-2.9L3 19.5ZM19.8 10.3 16 8.3 12.9 11.4l3.3 3.3 3.7-2a1.9 1.9 0 0 0 0-3.4Z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn glyph_html(icon: FeatureIcon) -> String {
        view! { <FeatureGlyph icon=icon /> }.to_html()
    }

    #[test]
    fn every_feature_icon_has_a_glyph() {
        for icon in FeatureIcon::ALL {
            let html = glyph_html(icon);
            assert!(html.contains("<svg"), "{icon:?} rendered no svg: {html}");
            assert!(html.contains("<path"), "{icon:?} rendered no path: {html}");
        }
    }

    #[test]
    fn glyphs_are_distinct() {
        let bar = glyph_html(FeatureIcon::BarChart);
        let trend = glyph_html(FeatureIcon::TrendingUp);
        let sparkles = glyph_html(FeatureIcon::Sparkles);

        assert!(bar.contains(ICON_BAR_CHART));
        assert!(trend.contains(ICON_TRENDING_UP));
        assert!(sparkles.contains(ICON_SPARKLES));
        assert_ne!(bar, trend);
        assert_ne!(trend, sparkles);
    }

    #[test]
    fn stroked_glyphs_have_no_fill() {
        let bar = glyph_html(FeatureIcon::BarChart);
        assert!(bar.contains(r#"stroke="currentColor""#));
        assert!(!bar.contains(r#"fill="currentColor""#));
    }
}
