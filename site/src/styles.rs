//! CSS styles for the landing page.
//!
//! Every component uses class tokens resolved here. The palette follows the
//! app: primary blue on near-white, soft blue bands, rounded cards.
//!
//! The stylesheet is inlined as a `<style>` text node, so it must not contain
//! `<`, `>` or `&` (they would be escaped). Use descendant selectors instead of
//! child combinators.

/// Complete CSS for the page.
pub const SITE_CSS: &str = r#"
:root {
    --primary: #1E88E5;
    --primary-light: #E3F2FD;
    --blue-soft: #EAF5FF;
    --surface: #FFFFFF;
    --bg: #F7F9FC;
    --text: #0F172A;
    --text-muted: #475569;
    --border: #E2E8F0;
    --radius-xl: 16px;
    --shadow-soft: 0 10px 30px rgba(30, 136, 229, 0.12);
    --shadow-card: 0 12px 24px rgba(15, 23, 42, 0.06);
    --shadow-button: 0 12px 24px rgba(30, 136, 229, 0.24);
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html.scroll-smooth {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    background: var(--bg);
    color: var(--text);
    font-family: var(--font-sans);
    line-height: 1.5;
}

body.antialiased {
    -webkit-font-smoothing: antialiased;
    -moz-osx-font-smoothing: grayscale;
}

img {
    display: block;
    max-width: 100%;
}

a {
    color: inherit;
}

.container {
    margin: 0 auto;
    max-width: var(--container-max);
    padding-left: 1rem;
    padding-right: 1rem;
}

.section {
    padding-top: 3.5rem;
    padding-bottom: 3.5rem;
}

/* Reveal animation */
@keyframes fade-up {
    0% { opacity: 0; transform: translateY(12px); }
    100% { opacity: 1; transform: translateY(0); }
}

.reveal {
    animation: fade-up 700ms ease-out both;
}

@media (prefers-reduced-motion: reduce) {
    .reveal { animation: none; }
}

/* Section headings */
.section-header {
    margin: 0 auto;
    max-width: 42rem;
    text-align: center;
}

.section-title {
    margin: 0;
    font-size: 1.5rem;
    font-weight: 600;
}

.section-description {
    margin: 0.75rem 0 0;
    color: var(--text-muted);
}

/* Cards */
.card {
    background: var(--surface);
    border-radius: var(--radius-xl);
    box-shadow: var(--shadow-card);
}

.card-grid {
    display: grid;
    gap: 1.25rem;
    margin-top: 2.5rem;
}

/* Buttons */
.store-buttons {
    display: flex;
    flex-wrap: wrap;
    align-items: center;
    gap: 0.75rem;
}

.store-button {
    display: inline-flex;
    align-items: center;
    gap: 0.75rem;
    height: 3rem;
    padding: 0 1rem 0 0.75rem;
    border-radius: 9999px;
    font-weight: 600;
    text-decoration: none;
    transition: transform 150ms ease, box-shadow 150ms ease;
}

.store-button:hover {
    transform: translateY(-1px);
}

.btn-primary {
    background: var(--primary);
    color: #FFFFFF;
    box-shadow: var(--shadow-button);
}

.btn-primary-inverted {
    background: #FFFFFF;
    color: var(--primary);
    box-shadow: 0 12px 24px rgba(15, 23, 42, 0.18);
}

.text-white { color: #FFFFFF; }
.text-primary { color: var(--primary); }

.store-label {
    position: absolute;
    width: 1px;
    height: 1px;
    overflow: hidden;
    clip: rect(0, 0, 0, 0);
    white-space: nowrap;
}

/* Hero */
.hero {
    position: relative;
    overflow: hidden;
}

.hero-blob {
    position: absolute;
    top: -6rem;
    right: -8rem;
    width: 480px;
    height: 480px;
    opacity: 0.3;
    pointer-events: none;
}

.hero-container {
    padding-top: 4rem;
    padding-bottom: 4rem;
}

.hero-grid {
    display: grid;
    align-items: center;
    gap: 3rem;
}

.hero-title {
    margin: 0;
    font-size: clamp(28px, 5vw, 56px);
    font-weight: 600;
    line-height: 1.15;
    text-wrap: balance;
}

.hero-subtitle {
    margin: 1.5rem 0 0;
    font-size: 18px;
    color: var(--text-muted);
}

.hero-actions {
    padding-top: 2rem;
}

.hero-visual {
    position: relative;
    margin: 0 auto;
    width: 100%;
    max-width: 24rem;
}

.hero-glow {
    position: absolute;
    inset: -1.5rem;
    z-index: -1;
    border-radius: 32px;
    background-color: rgba(227, 242, 253, 0.7);
    filter: blur(40px);
}

/* Phone frame */
.phone-frame {
    margin: 0 auto;
    width: 300px;
}

.phone-bezel {
    position: relative;
    padding: 0.5rem;
    border-radius: 2.5rem;
    background: #0F172A;
    box-shadow: var(--shadow-soft);
}

.phone-screen-border {
    padding: 0.5rem;
    border-radius: 2rem;
    background: #000000;
}

.phone-screen {
    position: relative;
    overflow: hidden;
    border-radius: 1.6rem;
    background: #1E293B;
}

.phone-screen-img {
    width: 100%;
    height: auto;
    object-fit: cover;
}

.phone-notch {
    position: absolute;
    top: 0.5rem;
    left: 50%;
    width: 6rem;
    height: 1.5rem;
    transform: translateX(-50%);
    border-radius: 0 0 1rem 1rem;
    background: #000000;
}

/* Features */
.feature-card {
    padding: 1.5rem;
}

.feature-icon {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 3rem;
    height: 3rem;
    margin-bottom: 1rem;
    border-radius: 0.75rem;
    background: var(--primary-light);
    color: var(--primary);
}

.feature-title {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 600;
}

.feature-description {
    margin: 0.5rem 0 0;
    color: var(--text-muted);
}

/* Metrics */
.metrics {
    background: rgba(255, 255, 255, 0.6);
}

.metrics-grid {
    display: grid;
    align-items: center;
    gap: 1.5rem;
    padding-top: 3rem;
    padding-bottom: 3rem;
    text-align: center;
}

.metric-value {
    font-size: 1.875rem;
    font-weight: 600;
    color: var(--primary);
}

.metric-label {
    margin-top: 0.25rem;
    color: var(--text-muted);
}

/* Testimonials */
.testimonials {
    background: var(--blue-soft);
}

.quote-card {
    display: flex;
    flex-direction: column;
    gap: 1rem;
    margin: 0;
    padding: 1.5rem;
}

.quote-author {
    display: flex;
    align-items: center;
    gap: 0.75rem;
}

.avatar {
    width: 2.5rem;
    height: 2.5rem;
    border-radius: 9999px;
    object-fit: cover;
}

.quote-name {
    font-weight: 500;
}

.quote-text {
    margin: 0;
    color: #334155;
}

/* Screenshots */
.screenshot-scroller {
    margin-top: 2rem;
    overflow-x: auto;
}

.screenshot-strip {
    display: flex;
    gap: 1rem;
}

.screenshot-item {
    flex: 1;
    min-width: 240px;
    max-width: 280px;
}

.screenshot-card {
    position: relative;
    overflow: hidden;
    border: 1px solid #F1F5F9;
}

.screenshot-img {
    width: 100%;
    height: auto;
    object-fit: cover;
}

/* Call to action */
.cta {
    background: var(--primary);
    color: #FFFFFF;
}

.cta-grid {
    display: grid;
    align-items: center;
    gap: 2rem;
    padding-top: 3.5rem;
    padding-bottom: 3.5rem;
}

.cta-title {
    margin: 0;
    font-size: clamp(28px, 5vw, 40px);
    font-weight: 600;
}

/* Footer */
.footer {
    border-top: 1px solid var(--border);
    background: rgba(255, 255, 255, 0.6);
}

.footer-row {
    display: flex;
    flex-direction: column;
    align-items: center;
    justify-content: space-between;
    gap: 0.75rem;
    padding-top: 2rem;
    padding-bottom: 2rem;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.footer-links {
    display: flex;
    gap: 1rem;
}

.footer-link {
    text-decoration: none;
    text-underline-offset: 4px;
}

.footer-link:hover {
    color: var(--primary);
    text-decoration: underline;
}

.footer-copyright {
    margin: 0;
}

/* Breakpoints */
@media (min-width: 640px) {
    .section { padding-top: 4rem; padding-bottom: 4rem; }
    .section-title { font-size: 1.875rem; }
    .card-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .metrics-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .metric-value { font-size: 2.25rem; }
    .hero-subtitle { font-size: 20px; }
    .phone-frame { width: 340px; }
    .screenshot-strip { gap: 1.5rem; }
    .footer-row { flex-direction: row; }
}

@media (min-width: 768px) {
    .section { padding-top: 5rem; padding-bottom: 5rem; }
    .card-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); margin-top: 3rem; }
    .hero-container { padding-top: 6rem; padding-bottom: 6rem; }
    .hero-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .hero-visual { max-width: 28rem; }
    .phone-frame { width: 380px; }
    .cta-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .cta-actions { justify-self: end; }
    .store-label { position: static; width: auto; height: auto; overflow: visible; clip: auto; }
}
"#;
