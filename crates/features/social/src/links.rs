use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString};

/// Networks the product links to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Display,
    AsRefStr,
    EnumString,
    EnumIter,
    EnumCount,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Platform {
    Twitter,
    Instagram,
    Facebook,
    Youtube,
}

impl Platform {
    /// Iconify identifier of the platform glyph.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Twitter => "ri:twitter-x-fill",
            Self::Instagram => "mdi:instagram",
            Self::Facebook => "mdi:facebook",
            Self::Youtube => "mdi:youtube",
        }
    }

    /// SVG path data of the glyph on a 24x24 canvas.
    #[must_use]
    pub const fn icon_path(self) -> &'static str {
        match self {
            Self::Twitter => {
                "M17.687 3.063l-4.996 5.711l-4.32-5.711H2.112l7.477 9.776l-7.086 8.099h3.034l5.469-6.25l4.78 6.25h6.102l-7.794-10.304l6.625-7.571zm-1.064 16.06L5.654 4.782h1.803l10.846 14.34z"
            },
            Self::Instagram => {
                "M7.8 2h8.4C19.4 2 22 4.6 22 7.8v8.4a5.8 5.8 0 0 1-5.8 5.8H7.8C4.6 22 2 19.4 2 16.2V7.8A5.8 5.8 0 0 1 7.8 2m-.2 2A3.6 3.6 0 0 0 4 7.6v8.8C4 18.39 5.61 20 7.6 20h8.8a3.6 3.6 0 0 0 3.6-3.6V7.6C20 5.61 18.39 4 16.4 4zm9.65 1.5a1.25 1.25 0 0 1 1.25 1.25A1.25 1.25 0 0 1 17.25 8A1.25 1.25 0 0 1 16 6.75a1.25 1.25 0 0 1 1.25-1.25M12 7a5 5 0 0 1 5 5a5 5 0 0 1-5 5a5 5 0 0 1-5-5a5 5 0 0 1 5-5m0 2a3 3 0 0 0-3 3a3 3 0 0 0 3 3a3 3 0 0 0 3-3a3 3 0 0 0-3-3"
            },
            Self::Facebook => {
                "M12 2.04c-5.5 0-10 4.49-10 10.02c0 5 3.66 9.15 8.44 9.9v-7H7.9v-2.9h2.54V9.85c0-2.51 1.49-3.89 3.78-3.89c1.09 0 2.23.19 2.23.19v2.47h-1.26c-1.24 0-1.63.77-1.63 1.56v1.88h2.78l-.45 2.9h-2.33v7a10 10 0 0 0 8.44-9.9c0-5.53-4.5-10.02-10-10.02"
            },
            Self::Youtube => {
                "m10 15l5.19-3L10 9zm11.56-7.83c.13.47.22 1.1.28 1.9c.07.8.1 1.49.1 2.09L22 12c0 2.19-.16 3.8-.44 4.83c-.25.9-.83 1.48-1.73 1.73c-.47.13-1.33.22-2.65.28c-1.3.07-2.49.1-3.59.1L12 19c-4.19 0-6.8-.16-7.83-.44c-.9-.25-1.48-.83-1.73-1.73c-.13-.47-.22-1.1-.28-1.9c-.07-.8-.1-1.49-.1-2.09L2 12c0-2.19.16-3.8.44-4.83c.25-.9.83-1.48 1.73-1.73c.47-.13 1.33-.22 2.65-.28c1.3-.07 2.49-.1 3.59-.1L12 5c4.19 0 6.8.16 7.83.44c.9.25 1.48.83 1.73 1.73"
            },
        }
    }
}

/// One entry of the footer link list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLink {
    pub platform: Platform,
    pub href: &'static str,
    pub aria_label: &'static str,
    pub icon: &'static str,
}

impl SocialLink {
    const fn new(platform: Platform, aria_label: &'static str) -> Self {
        Self { platform, href: "/", aria_label, icon: platform.icon() }
    }
}

/// The links, in display order.
pub const SOCIAL_LINKS: [SocialLink; Platform::COUNT] = [
    SocialLink::new(Platform::Twitter, "twitter"),
    SocialLink::new(Platform::Instagram, "instagram"),
    SocialLink::new(Platform::Facebook, "facebook"),
    SocialLink::new(Platform::Youtube, "youtube"),
];

#[must_use]
pub const fn links() -> &'static [SocialLink] {
    &SOCIAL_LINKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn one_link_per_platform_in_declaration_order() {
        let platforms: Vec<_> = links().iter().map(|link| link.platform).collect();
        assert_eq!(platforms, Platform::iter().collect::<Vec<_>>());
    }

    #[test]
    fn labels_are_platform_names() {
        for link in links() {
            assert_eq!(link.aria_label, link.platform.as_ref());
            assert_eq!(link.icon, link.platform.icon());
        }
    }
}
