use leptos::prelude::*;

use super::{ButtonVariant, StoreButtons};

/// Closing download prompt on the primary color.
#[component]
pub fn CtaSection() -> impl IntoView {
    view! {
        <section class="cta" data-section="cta">
            <div class="container cta-grid">
                <h2 class="cta-title reveal">
                    "Télécharge Cléa et prends le contrôle de ton patrimoine"
                </h2>
                <div class="cta-actions reveal">
                    <StoreButtons variant=ButtonVariant::Inverted />
                </div>
            </div>
        </section>
    }
}
