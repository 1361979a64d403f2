use leptos::prelude::*;

use super::{Image, SectionHeader};
use crate::catalog::ScreenshotRef;

const SHOT_WIDTH: u32 = 520;
const SHOT_HEIGHT: u32 = 1040;

/// Horizontally scrollable strip of app screens, in catalog order.
#[component]
pub fn ScreenshotsSection(
    /// Screens, left to right
    screenshots: Vec<ScreenshotRef>,
) -> impl IntoView {
    view! {
        <section class="container section" data-section="screenshots">
            <SectionHeader
                title="Aperçus de l’app"
                description="Fais défiler quelques écrans clés de Cléa."
            />
            <div class="screenshot-scroller">
                <div class="screenshot-strip">
                    {screenshots
                        .into_iter()
                        .map(|shot| {
                            view! {
                                <div class="screenshot-item">
                                    <div class="card screenshot-card">
                                        <Image
                                            src=shot.as_str().to_string()
                                            alt="Capture d’écran de Cléa"
                                            width=SHOT_WIDTH
                                            height=SHOT_HEIGHT
                                            class="screenshot-img"
                                        />
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
