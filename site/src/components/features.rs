use leptos::prelude::*;

use super::{FeatureGlyph, SectionHeader};
use crate::catalog::FeatureItem;

/// Grid of feature cards, one per item, in catalog order.
#[component]
pub fn FeaturesSection(
    /// Cards, in display order
    features: Vec<FeatureItem>,
) -> impl IntoView {
    view! {
        <section class="container section" data-section="features">
            <SectionHeader
                title="Tout pour comprendre et agir"
                description="Trois outils clés pour situer ton patrimoine, le projeter et agir avec des conseils adaptés."
            />
            <div class="card-grid">
                {features.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    view! {
        <article class="card feature-card" data-key=feature.id>
            <div class="feature-icon" data-icon=feature.icon.as_str()>
                <FeatureGlyph icon=feature.icon />
            </div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
