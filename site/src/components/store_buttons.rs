//! App Store / Google Play download links.

use leptos::prelude::*;

use super::{ICON_APP_STORE, ICON_GOOGLE_PLAY, Icon};

/// Color treatment of the store buttons.
///
/// Only class tokens depend on the variant; link targets and texts do not.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Primary-colored buttons on a light background
    #[default]
    Default,
    /// White buttons on a primary-colored background
    Inverted,
}

impl ButtonVariant {
    /// Class tokens for the link element.
    pub const fn button_class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-primary store-button",
            ButtonVariant::Inverted => "btn-primary-inverted store-button",
        }
    }

    /// Class tokens for the store glyph.
    pub const fn icon_class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "text-white",
            ButtonVariant::Inverted => "text-primary",
        }
    }
}

/// A store download link.
#[derive(Clone, Copy, Debug)]
pub struct StoreLink {
    /// Visible label (screen-reader only on small screens)
    pub label: &'static str,
    /// Accessible name of the link
    pub aria_label: &'static str,
    /// Link target
    pub href: &'static str,
    /// Store glyph path data
    pub icon: &'static str,
}

// TODO: point both links at the published store listings once they exist.
/// The two platform links, in display order.
pub const STORE_LINKS: [StoreLink; 2] = [
    StoreLink {
        label: "App Store",
        aria_label: "Télécharger sur l’App Store",
        href: "#",
        icon: ICON_APP_STORE,
    },
    StoreLink {
        label: "Google Play",
        aria_label: "Télécharger sur Google Play",
        href: "#",
        icon: ICON_GOOGLE_PLAY,
    },
];

/// Pair of store download buttons.
#[component]
pub fn StoreButtons(
    /// Color treatment
    #[prop(optional)]
    variant: ButtonVariant,
) -> impl IntoView {
    let button_class = variant.button_class();
    let icon_class = variant.icon_class();

    view! {
        <div class="store-buttons">
            {STORE_LINKS
                .into_iter()
                .map(|link| {
                    view! {
                        <a href=link.href aria-label=link.aria_label class=button_class>
                            <Icon path=link.icon size="28" class=icon_class />
                            <span class="store-label">{link.label}</span>
                        </a>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
