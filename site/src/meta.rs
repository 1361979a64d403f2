//! Document-level metadata: `<title>`, description, Open Graph and icon.
//!
//! Set once before rendering. The defaults are the production values, so a
//! config file only needs to name what it changes:
//!
//! ```rust
//! use clea_site::meta::PageMeta;
//!
//! let meta: PageMeta = toml::from_str(r#"url = "https://clea.app""#).unwrap();
//! assert_eq!(meta.url, "https://clea.app");
//! assert_eq!(meta.lang, "fr");
//! ```

use serde::{Deserialize, Serialize};

/// Page metadata surface.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMeta {
    /// `lang` attribute of the `<html>` element
    pub lang: String,
    /// Document and Open Graph title
    pub title: String,
    /// Meta and Open Graph description
    pub description: String,
    /// Canonical URL of the deployed page
    pub url: String,
    /// Open Graph site name
    pub site_name: String,
    /// Open Graph locale (`fr_FR`)
    pub locale: String,
    /// Open Graph object type
    pub og_type: String,
    /// Social preview image
    pub image: SocialImage,
    /// Favicon reference
    pub icon: String,
}

/// Image attached to social previews.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialImage {
    /// Image path or absolute URL
    pub url: String,
    /// Intrinsic width in pixels
    pub width: u32,
    /// Intrinsic height in pixels
    pub height: u32,
    /// Accessible description
    pub alt: String,
}

const TITLE: &str = "Cléa — Découvre ton rang patrimonial en 2 minutes";
const DESCRIPTION: &str = "Compare ta situation financière avec celle des Français de ton âge \
                           et reçois des conseils personnalisés par notre IA.";

impl Default for PageMeta {
    fn default() -> Self {
        Self {
            lang: "fr".into(),
            title: TITLE.into(),
            description: DESCRIPTION.into(),
            url: "https://example.com".into(),
            site_name: "Cléa".into(),
            locale: "fr_FR".into(),
            og_type: "website".into(),
            image: SocialImage::default(),
            icon: "/favicon.ico".into(),
        }
    }
}

impl Default for SocialImage {
    fn default() -> Self {
        Self {
            url: "/favicon.ico".into(),
            width: 256,
            height: 256,
            alt: "Cléa".into(),
        }
    }
}
