//! Root document component - the complete HTML page

use leptos::prelude::*;

use crate::catalog::Catalog;
use crate::meta::PageMeta;
use crate::page::LandingPage;
use crate::styles::SITE_CSS;

/// The complete HTML document: metadata head plus the landing page body.
#[component]
pub fn PageDocument(
    /// Page content
    catalog: Catalog,
    /// Head metadata
    meta: PageMeta,
) -> impl IntoView {
    let PageMeta {
        lang,
        title,
        description,
        url,
        site_name,
        locale,
        og_type,
        image,
        icon,
    } = meta;

    view! {
        <html lang=lang class="scroll-smooth">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title.clone()}</title>
                <meta name="description" content=description.clone() />
                <link rel="icon" href=icon />
                <link rel="canonical" href=url.clone() />

                <OpenGraph property="og:title" content=title />
                <OpenGraph property="og:description" content=description />
                <OpenGraph property="og:url" content=url />
                <OpenGraph property="og:site_name" content=site_name />
                <OpenGraph property="og:locale" content=locale />
                <OpenGraph property="og:type" content=og_type />
                <OpenGraph property="og:image" content=image.url />
                <OpenGraph property="og:image:width" content=image.width.to_string() />
                <OpenGraph property="og:image:height" content=image.height.to_string() />
                <OpenGraph property="og:image:alt" content=image.alt />

                <style>{SITE_CSS}</style>
            </head>
            <body class="antialiased">
                <LandingPage catalog=catalog />
            </body>
        </html>
    }
}

/// One `<meta property=… content=…>` Open Graph tag.
///
/// `property` is not a standard `<meta>` attribute, so it goes through
/// [`CustomAttribute`] rather than the `view!` attribute methods.
#[component]
fn OpenGraph(
    /// Open Graph key, e.g. `og:title`
    property: &'static str,
    /// Tag value
    content: String,
) -> impl IntoView {
    leptos::html::meta()
        .attr("property", property)
        .attr("content", content)
}
