//! Leptos UI components for rendering the landing page.
//!
//! Every component is a stateless `#[component]` function of the data it is
//! handed. Section renderers never call each other; they share only the
//! presentational primitives.
//!
//! # Component Hierarchy
//!
//! ```text
//! PageDocument
//! └── LandingPage (Section::ORDER)
//!     ├── HeroSection
//!     │   ├── StoreButtons (default)
//!     │   └── PhoneFrame
//!     │       └── Image
//!     ├── FeaturesSection
//!     │   └── FeatureCard → FeatureGlyph
//!     ├── MetricsSection
//!     ├── TestimonialsSection
//!     │   └── QuoteCard → Image
//!     ├── ScreenshotsSection
//!     │   └── Image (per screenshot)
//!     ├── CtaSection
//!     │   └── StoreButtons (inverted)
//!     └── FooterSection
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`], but can be
//! rendered on their own:
//!
//! ```rust
//! use clea_site::catalog::Catalog;
//! use clea_site::components::FeaturesSection;
//! use leptos::prelude::*;
//! use leptos::tachys::view::RenderHtml;
//!
//! let features = Catalog::builtin().features().to_vec();
//! let html = view! { <FeaturesSection features=features /> }.to_html();
//! assert!(html.contains("Classement patrimonial"));
//! ```

mod cta;
mod document;
mod features;
mod footer;
mod hero;
mod icons;
mod image;
mod metrics;
mod phone_frame;
mod screenshots;
mod section;
mod store_buttons;
mod testimonials;

pub use cta::CtaSection;
pub use document::PageDocument;
pub use features::FeaturesSection;
pub use footer::FooterSection;
pub use hero::HeroSection;
pub use icons::*;
pub use image::Image;
pub use metrics::MetricsSection;
pub use phone_frame::PhoneFrame;
pub use screenshots::ScreenshotsSection;
pub use section::SectionHeader;
pub use store_buttons::{ButtonVariant, STORE_LINKS, StoreButtons, StoreLink};
pub use testimonials::TestimonialsSection;
