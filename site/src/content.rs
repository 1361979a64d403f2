//! Shipped page copy (French).

use crate::catalog::{
    Catalog, FeatureIcon, FeatureItem, HeroContent, MetricItem, ScreenshotRef, TestimonialItem,
};

pub(crate) fn builtin() -> Catalog {
    Catalog::from_parts_unchecked(hero(), features(), metrics(), testimonials(), screenshots())
}

fn hero() -> HeroContent {
    HeroContent {
        title: "Découvre ton rang patrimonial en 2 minutes".into(),
        subtitle: "Compare ta situation financière avec celle des Français de ton âge \
                   et reçois des conseils personnalisés par notre IA."
            .into(),
        phone_image: "/screen-1.png".into(),
    }
}

fn features() -> Vec<FeatureItem> {
    vec![
        FeatureItem {
            id: "ranking".into(),
            title: "Classement patrimonial".into(),
            description: "Vois où tu te situes par rapport aux Français de ton âge.".into(),
            icon: FeatureIcon::BarChart,
        },
        FeatureItem {
            id: "projection".into(),
            title: "Simulation d’épargne".into(),
            description: "Projette ton patrimoine sur 1 à 30 ans.".into(),
            icon: FeatureIcon::TrendingUp,
        },
        FeatureItem {
            id: "ai".into(),
            title: "Conseils IA personnalisés".into(),
            description: "Recommandations adaptées à ton profil.".into(),
            icon: FeatureIcon::Sparkles,
        },
    ]
}

fn metrics() -> Vec<MetricItem> {
    [
        ("+10 000", "Utilisateurs actifs"),
        ("4,8/5", "Note moyenne"),
        ("2 min", "Temps d’analyse"),
    ]
    .into_iter()
    .map(|(value, label)| MetricItem {
        value: value.into(),
        label: label.into(),
    })
    .collect()
}

fn testimonials() -> Vec<TestimonialItem> {
    [
        (
            "Caroline",
            "/caroline.png",
            "Superbe app finance, rapide et pédagogique.",
        ),
        (
            "Julien",
            "/julien.png",
            "Une application claire, j’ai compris mon niveau en un clin d’œil.",
        ),
        (
            "Thomas",
            "/thomas.png",
            "Des conseils pertinents pour passer un cap.",
        ),
    ]
    .into_iter()
    .map(|(name, avatar, text)| TestimonialItem {
        name: name.into(),
        avatar: avatar.into(),
        text: text.into(),
    })
    .collect()
}

fn screenshots() -> Vec<ScreenshotRef> {
    (1..=5)
        .map(|n| ScreenshotRef::new(format!("/screen-{n}.png")))
        .collect()
}
