//! # clea-site
//!
//! Leptos SSR renderer for the Cléa landing page.
//!
//! Typed, immutable content goes in; one static HTML document comes out.
//! Rendering is a single synchronous pass with no reactive runtime, no
//! hydration and no hidden state, so the same catalog always produces the
//! same bytes.
//!
//! ## Quick Start
//!
//! ```rust
//! use clea_site::{render_page, catalog::Catalog, meta::PageMeta};
//!
//! let html = render_page(Catalog::builtin(), &PageMeta::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`catalog`] - content records and the construction-time key checks
//! - [`components`] - section renderers and shared primitives
//! - [`page`] - the fixed section order
//! - [`meta`] - document metadata (title, Open Graph, icon)
//! - [`styles`] - the inline stylesheet
//!
//! ## Leptos 0.8 SSR
//!
//! Views are turned into strings with `RenderHtml::to_html`:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <MyComponent /> };
//! let html: String = view.to_html();
//! ```

#![recursion_limit = "512"]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod catalog;
pub mod components;
mod content;
pub mod meta;
pub mod page;
pub mod styles;

pub use catalog::{Catalog, CatalogError};
pub use page::Section;

use components::PageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use meta::PageMeta;

/// Render the complete landing page document.
///
/// # Returns
///
/// A complete HTML document as a `String`, including `<!DOCTYPE html>`.
///
/// # Example
///
/// ```rust
/// use clea_site::{render_page, Catalog, meta::PageMeta};
///
/// let meta = PageMeta {
///     title: "Cléa".into(),
///     ..Default::default()
/// };
/// let html = render_page(Catalog::builtin(), &meta);
/// assert!(html.contains("<title>Cléa</title>"));
/// ```
pub fn render_page(catalog: &Catalog, meta: &PageMeta) -> String {
    let doc = view! {
        <PageDocument catalog=catalog.clone() meta=meta.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Render one section as an HTML fragment.
pub fn render_section(section: Section, catalog: &Catalog) -> String {
    page::section_view(section, catalog).to_html()
}
