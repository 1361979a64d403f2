//! Phone mockup wrapped around a single screen image.

use leptos::prelude::*;

use super::Image;

/// Intrinsic size of the screens shown in the frame.
const SCREEN_WIDTH: u32 = 720;
const SCREEN_HEIGHT: u32 = 1480;

/// Decorative phone bezel with a notch around one screen image.
#[component]
pub fn PhoneFrame(
    /// Screen image identifier
    #[prop(into)]
    image: String,
    /// Accessible description of the screen
    #[prop(into, default = String::new())]
    alt: String,
) -> impl IntoView {
    view! {
        <div class="phone-frame">
            <div class="phone-bezel">
                <div class="phone-screen-border">
                    <div class="phone-screen">
                        <Image
                            src=image
                            alt=alt
                            width=SCREEN_WIDTH
                            height=SCREEN_HEIGHT
                            class="phone-screen-img"
                            priority=true
                        />
                    </div>
                </div>
                <div class="phone-notch" aria-hidden="true"></div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn wraps_one_priority_image() {
        let html = view! { <PhoneFrame image="/screen-1.png" alt="Aperçu" /> }.to_html();
        assert_eq!(html.matches("<img").count(), 1);
        assert!(html.contains(r#"src="/screen-1.png""#));
        assert!(html.contains(r#"alt="Aperçu""#));
        assert!(html.contains(r#"width="720""#));
        assert!(html.contains(r#"loading="eager""#));
        assert!(html.contains("phone-notch"));
    }

    #[test]
    fn alt_defaults_to_empty() {
        let html = view! { <PhoneFrame image="/screen-2.png" /> }.to_html();
        assert!(html.contains(r#"alt="""#));
    }
}
