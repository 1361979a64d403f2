//! Page composer: the fixed order of the landing page sections.

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::components::{
    CtaSection, FeaturesSection, FooterSection, HeroSection, MetricsSection, ScreenshotsSection,
    TestimonialsSection,
};

/// One of the seven landing page sections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    /// Headline and phone mockup
    Hero,
    /// Feature cards
    Features,
    /// Headline figures
    Metrics,
    /// Quote cards
    Testimonials,
    /// Screenshot strip
    Screenshots,
    /// Download prompt
    Cta,
    /// Legal links
    Footer,
}

impl Section {
    /// Top-to-bottom order of the page.
    pub const ORDER: [Section; 7] = [
        Section::Hero,
        Section::Features,
        Section::Metrics,
        Section::Testimonials,
        Section::Screenshots,
        Section::Cta,
        Section::Footer,
    ];

    /// Value of the `data-section` attribute on the section root.
    pub const fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Features => "features",
            Section::Metrics => "metrics",
            Section::Testimonials => "testimonials",
            Section::Screenshots => "screenshots",
            Section::Cta => "cta",
            Section::Footer => "footer",
        }
    }
}

/// Project the catalog slice a section needs into its renderer.
pub fn section_view(section: Section, catalog: &Catalog) -> AnyView {
    match section {
        Section::Hero => view! { <HeroSection hero=catalog.hero().clone() /> }.into_any(),
        Section::Features => {
            view! { <FeaturesSection features=catalog.features().to_vec() /> }.into_any()
        }
        Section::Metrics => {
            view! { <MetricsSection metrics=catalog.metrics().to_vec() /> }.into_any()
        }
        Section::Testimonials => view! {
            <TestimonialsSection testimonials=catalog.testimonials().to_vec() />
        }
        .into_any(),
        Section::Screenshots => view! {
            <ScreenshotsSection screenshots=catalog.screenshots().to_vec() />
        }
        .into_any(),
        Section::Cta => view! { <CtaSection /> }.into_any(),
        Section::Footer => view! { <FooterSection /> }.into_any(),
    }
}

/// All sections, in [`Section::ORDER`], inside `<main>`.
#[component]
pub fn LandingPage(
    /// Content projected into the sections
    catalog: Catalog,
) -> impl IntoView {
    view! {
        <main>
            {Section::ORDER
                .into_iter()
                .map(|section| section_view(section, &catalog))
                .collect::<Vec<_>>()}
        </main>
    }
}
