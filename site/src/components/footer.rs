use leptos::prelude::*;

const LEGAL_LINKS: [(&str, &str); 2] = [
    ("Mentions légales", "#"),
    ("Politique de confidentialité", "#"),
];

/// Legal links and copyright line.
#[component]
pub fn FooterSection() -> impl IntoView {
    view! {
        <footer class="footer" data-section="footer">
            <div class="container footer-row">
                <nav class="footer-links" aria-label="Liens légaux">
                    {LEGAL_LINKS
                        .into_iter()
                        .map(|(label, href)| view! { <a href=href class="footer-link">{label}</a> })
                        .collect::<Vec<_>>()}
                </nav>
                <p class="footer-copyright">"© 2025 Cléa — Tous droits réservés."</p>
            </div>
        </footer>
    }
}
