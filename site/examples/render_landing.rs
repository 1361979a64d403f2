//! Render the built-in landing page to a file.
//!
//! Run with: `cargo run --example render_landing`

use clea_site::{Catalog, meta::PageMeta, render_page};

fn main() {
    let html = render_page(Catalog::builtin(), &PageMeta::default());

    let output_path = "landing.html";
    std::fs::write(output_path, &html).expect("Failed to write page");

    println!("Page written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
}
