use leptos::prelude::*;

use super::{Image, SectionHeader};
use crate::catalog::TestimonialItem;

const AVATAR_SIZE: u32 = 40;

/// Quote cards with the author's avatar and name.
#[component]
pub fn TestimonialsSection(
    /// Quotes, in display order
    testimonials: Vec<TestimonialItem>,
) -> impl IntoView {
    view! {
        <section class="testimonials" data-section="testimonials">
            <div class="container section">
                <SectionHeader
                    title="Ils nous font confiance"
                    description="Des milliers d’utilisateurs évaluent leur patrimoine et progressent avec Cléa."
                />
                <div class="card-grid">
                    {testimonials
                        .into_iter()
                        .map(|testimonial| view! { <QuoteCard testimonial=testimonial /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn QuoteCard(testimonial: TestimonialItem) -> impl IntoView {
    let alt = format!("Avatar de {}", testimonial.name);
    let quote = format!("“{}”", testimonial.text);
    let key = testimonial.name.clone();

    view! {
        <figure class="card quote-card" data-key=key>
            <div class="quote-author">
                <Image
                    src=testimonial.avatar
                    alt=alt
                    width=AVATAR_SIZE
                    height=AVATAR_SIZE
                    class="avatar"
                />
                <figcaption class="quote-name">{testimonial.name}</figcaption>
            </div>
            <blockquote class="quote-text">{quote}</blockquote>
        </figure>
    }
}
