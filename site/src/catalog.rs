//! Content catalog: the typed records the landing page is rendered from.
//!
//! A [`Catalog`] is immutable once built. There are two ways to get one:
//!
//! - [`Catalog::builtin`] - the shipped page copy, initialised once per process
//! - [`Catalog::new`] / [`Catalog::from_toml_str`] - external content, checked
//!   for duplicate iteration keys before a catalog is handed out
//!
//! # Example
//!
//! ```rust
//! use clea_site::catalog::Catalog;
//!
//! let catalog = Catalog::from_toml_str(r#"
//! screenshots = ["/screen-1.png"]
//!
//! [hero]
//! title = "Titre"
//! subtitle = "Sous-titre"
//! phone_image = "/screen-1.png"
//!
//! [[features]]
//! id = "ranking"
//! title = "Classement"
//! description = "Ton rang."
//! icon = "bar-chart"
//! "#).unwrap();
//!
//! assert_eq!(catalog.features().len(), 1);
//! assert!(catalog.metrics().is_empty());
//! ```

use std::collections::HashSet;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::content;

static BUILTIN: Lazy<Catalog> = Lazy::new(content::builtin);

/// Errors raised at the catalog construction boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two records of one collection share the key used to identify them.
    #[error("duplicate {collection} key: {key:?}")]
    DuplicateKey {
        /// Collection name: "features", "metrics" or "testimonials"
        collection: &'static str,
        /// The repeated key
        key: String,
    },
    /// The source text is not a well-formed catalog (syntax, missing field,
    /// unknown icon name).
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Copy for the hero section.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Main headline
    pub title: String,
    /// Supporting paragraph under the headline
    pub subtitle: String,
    /// Screen shown inside the phone frame
    pub phone_image: String,
}

/// Glyph shown on a feature card.
///
/// The set is closed: every variant has a glyph, and an unknown name in
/// external content fails to deserialize.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureIcon {
    /// Three vertical bars
    BarChart,
    /// Rising line with arrow head
    TrendingUp,
    /// Two four-pointed stars
    Sparkles,
}

impl FeatureIcon {
    /// Every icon, in declaration order.
    pub const ALL: [FeatureIcon; 3] = [
        FeatureIcon::BarChart,
        FeatureIcon::TrendingUp,
        FeatureIcon::Sparkles,
    ];

    /// Name used in serialized content and in the `data-icon` attribute.
    pub const fn as_str(self) -> &'static str {
        match self {
            FeatureIcon::BarChart => "bar-chart",
            FeatureIcon::TrendingUp => "trending-up",
            FeatureIcon::Sparkles => "sparkles",
        }
    }
}

/// One card of the features grid.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureItem {
    /// Unique key within the features sequence
    pub id: String,
    /// Card title
    pub title: String,
    /// Card body text
    pub description: String,
    /// Glyph drawn above the title
    pub icon: FeatureIcon,
}

/// One figure of the metrics band. `label` doubles as the iteration key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricItem {
    /// Displayed figure ("+10 000", "4,8/5")
    pub value: String,
    /// Caption under the figure, unique within the sequence
    pub label: String,
}

/// One quote card. `name` doubles as the iteration key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestimonialItem {
    /// Author first name, unique within the sequence
    pub name: String,
    /// Avatar image identifier
    pub avatar: String,
    /// Quote body, rendered between typographic quotes
    pub text: String,
}

/// Opaque image identifier for the screenshot strip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScreenshotRef(String);

impl ScreenshotRef {
    /// Wrap an image path or URL.
    pub fn new(source: impl Into<String>) -> Self {
        Self(source.into())
    }

    /// The identifier as given.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ScreenshotRef {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

/// All display data for the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CatalogParts")]
pub struct Catalog {
    hero: HeroContent,
    features: Vec<FeatureItem>,
    metrics: Vec<MetricItem>,
    testimonials: Vec<TestimonialItem>,
    screenshots: Vec<ScreenshotRef>,
}

/// Unchecked wire shape of a catalog; only [`Catalog::new`] turns it into one.
#[derive(Deserialize)]
struct CatalogParts {
    hero: HeroContent,
    #[serde(default)]
    features: Vec<FeatureItem>,
    #[serde(default)]
    metrics: Vec<MetricItem>,
    #[serde(default)]
    testimonials: Vec<TestimonialItem>,
    #[serde(default)]
    screenshots: Vec<ScreenshotRef>,
}

impl TryFrom<CatalogParts> for Catalog {
    type Error = CatalogError;

    fn try_from(parts: CatalogParts) -> Result<Self, Self::Error> {
        Catalog::new(
            parts.hero,
            parts.features,
            parts.metrics,
            parts.testimonials,
            parts.screenshots,
        )
    }
}

impl Catalog {
    /// Build a catalog from external content, rejecting duplicate keys.
    pub fn new(
        hero: HeroContent,
        features: Vec<FeatureItem>,
        metrics: Vec<MetricItem>,
        testimonials: Vec<TestimonialItem>,
        screenshots: Vec<ScreenshotRef>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self::from_parts_unchecked(hero, features, metrics, testimonials, screenshots);
        catalog.validate()?;
        Ok(catalog)
    }

    /// Literal content that is correct by construction (see `content.rs`).
    pub(crate) fn from_parts_unchecked(
        hero: HeroContent,
        features: Vec<FeatureItem>,
        metrics: Vec<MetricItem>,
        testimonials: Vec<TestimonialItem>,
        screenshots: Vec<ScreenshotRef>,
    ) -> Self {
        Self {
            hero,
            features,
            metrics,
            testimonials,
            screenshots,
        }
    }

    /// Parse a TOML document into a validated catalog.
    pub fn from_toml_str(source: &str) -> Result<Self, CatalogError> {
        let parts: CatalogParts = toml::from_str(source)?;
        parts.try_into()
    }

    /// The shipped page content. Built on first access, shared afterwards.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    /// Check that every iteration key is unique within its own sequence.
    pub fn validate(&self) -> Result<(), CatalogError> {
        ensure_unique("features", self.features.iter().map(|f| f.id.as_str()))?;
        ensure_unique("metrics", self.metrics.iter().map(|m| m.label.as_str()))?;
        ensure_unique(
            "testimonials",
            self.testimonials.iter().map(|t| t.name.as_str()),
        )?;
        Ok(())
    }

    /// Hero copy.
    pub fn hero(&self) -> &HeroContent {
        &self.hero
    }

    /// Feature cards, in display order.
    pub fn features(&self) -> &[FeatureItem] {
        &self.features
    }

    /// Metric figures, in display order.
    pub fn metrics(&self) -> &[MetricItem] {
        &self.metrics
    }

    /// Testimonials, in display order.
    pub fn testimonials(&self) -> &[TestimonialItem] {
        &self.testimonials
    }

    /// Screenshot identifiers, in display order.
    pub fn screenshots(&self) -> &[ScreenshotRef] {
        &self.screenshots
    }
}

fn ensure_unique<'a>(
    collection: &'static str,
    keys: impl Iterator<Item = &'a str>,
) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for key in keys {
        if !seen.insert(key) {
            return Err(CatalogError::DuplicateKey {
                collection,
                key: key.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn hero() -> HeroContent {
        HeroContent {
            title: "Titre".into(),
            subtitle: "Sous-titre".into(),
            phone_image: "/screen-1.png".into(),
        }
    }

    pub(crate) fn feature(id: &str, icon: FeatureIcon) -> FeatureItem {
        FeatureItem {
            id: id.into(),
            title: format!("Titre {id}"),
            description: format!("Description {id}"),
            icon,
        }
    }

    pub(crate) fn empty_catalog() -> Catalog {
        Catalog::new(hero(), vec![], vec![], vec![], vec![]).expect("empty catalog is valid")
    }

    #[test]
    fn builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        catalog.validate().expect("builtin content has unique keys");
        assert_eq!(catalog.features().len(), 3);
        assert_eq!(catalog.metrics().len(), 3);
        assert_eq!(catalog.testimonials().len(), 3);
        assert_eq!(catalog.screenshots().len(), 5);
    }

    #[test]
    fn builtin_catalog_is_shared() {
        assert!(std::ptr::eq(Catalog::builtin(), Catalog::builtin()));
    }

    #[test]
    fn rejects_duplicate_feature_ids() {
        let err = Catalog::new(
            hero(),
            vec![
                feature("ai", FeatureIcon::Sparkles),
                feature("ai", FeatureIcon::BarChart),
            ],
            vec![],
            vec![],
            vec![],
        )
        .unwrap_err();

        match err {
            CatalogError::DuplicateKey { collection, key } => {
                assert_eq!(collection, "features");
                assert_eq!(key, "ai");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_duplicate_metric_labels() {
        let metric = MetricItem {
            value: "1".into(),
            label: "Note moyenne".into(),
        };
        let err = Catalog::new(hero(), vec![], vec![metric.clone(), metric], vec![], vec![])
            .unwrap_err();
        assert!(err.to_string().contains("metrics"));
        assert!(err.to_string().contains("Note moyenne"));
    }

    #[test]
    fn rejects_duplicate_testimonial_names() {
        let quote = TestimonialItem {
            name: "Julien".into(),
            avatar: "/julien.png".into(),
            text: "Top".into(),
        };
        let err = Catalog::new(hero(), vec![], vec![], vec![quote.clone(), quote], vec![])
            .unwrap_err();
        assert!(matches!(
            err,
            CatalogError::DuplicateKey {
                collection: "testimonials",
                ..
            }
        ));
    }

    #[test]
    fn duplicate_screenshots_are_allowed() {
        let shots = vec![ScreenshotRef::from("/a.png"), ScreenshotRef::from("/a.png")];
        let catalog = Catalog::new(hero(), vec![], vec![], vec![], shots).expect("valid");
        assert_eq!(catalog.screenshots().len(), 2);
    }

    #[test]
    fn toml_catalog_rejects_duplicates() {
        let source = r#"
[hero]
title = "t"
subtitle = "s"
phone_image = "/p.png"

[[metrics]]
value = "1"
label = "Same"

[[metrics]]
value = "2"
label = "Same"
"#;
        let err = Catalog::from_toml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateKey { .. }));
    }

    #[test]
    fn toml_catalog_rejects_unknown_icon() {
        let source = r#"
[hero]
title = "t"
subtitle = "s"
phone_image = "/p.png"

[[features]]
id = "x"
title = "X"
description = "x"
icon = "pie-chart"
"#;
        let err = Catalog::from_toml_str(source).unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().contains("pie-chart"));
    }

    #[test]
    fn toml_catalog_requires_hero() {
        let err = Catalog::from_toml_str("screenshots = []").unwrap_err();
        assert!(matches!(err, CatalogError::Parse(_)));
    }

    #[test]
    fn json_round_trip_keeps_wire_names() {
        let json = serde_json::to_value(Catalog::builtin()).expect("serialize");
        assert_eq!(json["features"][0]["icon"], "bar-chart");
        assert_eq!(json["hero"]["phone_image"], "/screen-1.png");
        assert_eq!(json["screenshots"][0], "/screen-1.png");

        let back: Catalog = serde_json::from_value(json).expect("deserialize");
        assert_eq!(&back, Catalog::builtin());
    }

    #[test]
    fn icon_names_match_serde() {
        for icon in FeatureIcon::ALL {
            let json = serde_json::to_string(&icon).expect("serialize");
            assert_eq!(json, format!("\"{}\"", icon.as_str()));
        }
    }
}
