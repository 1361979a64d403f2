//! Image primitive.
//!
//! Renderers hand over an identifier and intrinsic dimensions; load timing,
//! decoding and missing assets are left to the browser.

use leptos::prelude::*;

/// A laid-out `<img>` with intrinsic size and loading hints.
///
/// `priority` images load eagerly with high fetch priority (above the fold);
/// all others are lazy.
#[component]
pub fn Image(
    /// Image path or URL
    #[prop(into)]
    src: String,
    /// Intrinsic width in pixels
    width: u32,
    /// Intrinsic height in pixels
    height: u32,
    /// Accessible alternative text (empty for decorative images)
    #[prop(into, default = String::new())]
    alt: String,
    /// Layout class tokens
    #[prop(default = "")]
    class: &'static str,
    /// Load eagerly instead of lazily
    #[prop(default = false)]
    priority: bool,
) -> impl IntoView {
    let (loading, fetch_priority) = if priority {
        ("eager", "high")
    } else {
        ("lazy", "auto")
    };

    view! {
        <img
            src=src
            alt=alt
            width=width.to_string()
            height=height.to_string()
            class=class
            loading=loading
            fetchpriority=fetch_priority
            decoding="async"
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn carries_intrinsic_size() {
        let html = view! { <Image src="/a.png" width=520 height=1040 alt="Capture" /> }.to_html();
        assert!(html.contains(r#"src="/a.png""#));
        assert!(html.contains(r#"width="520""#));
        assert!(html.contains(r#"height="1040""#));
        assert!(html.contains(r#"alt="Capture""#));
        assert!(html.contains(r#"loading="lazy""#));
    }

    #[test]
    fn priority_images_load_eagerly() {
        let html = view! { <Image src="/hero.png" width=720 height=1480 priority=true /> }.to_html();
        assert!(html.contains(r#"loading="eager""#));
        assert!(html.contains(r#"fetchpriority="high""#));
        assert!(html.contains(r#"alt="""#));
    }
}
