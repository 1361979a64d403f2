//! Centered heading block shared by the content sections.

use leptos::prelude::*;

/// Section title with a one-line description underneath.
#[component]
pub fn SectionHeader(
    /// Heading text
    title: &'static str,
    /// Line under the heading
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="section-header">
            <h2 class="section-title reveal">{title}</h2>
            <p class="section-description reveal">{description}</p>
        </div>
    }
}
