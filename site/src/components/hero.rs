use leptos::prelude::*;

use super::{PhoneFrame, StoreButtons};
use crate::catalog::HeroContent;

/// Headline, subtitle and store links next to the phone mockup.
#[component]
pub fn HeroSection(
    /// Headline, subtitle and phone screen
    hero: HeroContent,
) -> impl IntoView {
    view! {
        <section class="hero" data-section="hero">
            <HeroBackdrop />
            <div class="container hero-container">
                <div class="hero-grid">
                    <div class="hero-content reveal">
                        <h1 class="hero-title">{hero.title}</h1>
                        <p class="hero-subtitle">{hero.subtitle}</p>
                        <div class="hero-actions">
                            <StoreButtons />
                        </div>
                    </div>
                    <div class="hero-visual reveal">
                        <div class="hero-glow" aria-hidden="true"></div>
                        <PhoneFrame image=hero.phone_image alt="Aperçu de l’application Cléa" />
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Soft blue gradient blob behind the top-right corner. Purely decorative.
#[component]
fn HeroBackdrop() -> impl IntoView {
    view! {
        <svg class="hero-blob" viewBox="0 0 400 400" aria-hidden="true" focusable="false">
            <defs>
                <linearGradient id="hero-blob-gradient" x1="0" x2="1" y1="0" y2="1">
                    <stop offset="0%" stop-color="#55B4FF" stop-opacity="0.35" />
                    <stop offset="100%" stop-color="#1E88E5" stop-opacity="0.15" />
                </linearGradient>
            </defs>
            <circle cx="200" cy="200" r="200" fill="url(#hero-blob-gradient)" />
        </svg>
    }
}
