//! `[site.open_graph]` and `[site.twitter]`: link-preview metadata.

use super::icons::SITE_LOGO;
use serde::{Deserialize, Serialize};

/// An entry of `[[site.open_graph.images]]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

impl OgImage {
    /// Image known only by its path.
    pub fn bare(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            width: None,
            height: None,
            alt: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenGraphConfig {
    pub title: String,
    pub description: String,
    /// Canonical URL of the home page.
    pub url: String,
    pub site_name: String,
    /// Locale in `language_TERRITORY` form, e.g. `en_IN`.
    pub locale: String,
    #[serde(rename = "type")]
    pub og_type: String,
    pub images: Vec<OgImage>,
}

impl Default for OpenGraphConfig {
    fn default() -> Self {
        Self {
            title: "Megha Enterprises | Electrical, Solar & Fabrication Excellence".into(),
            description: "ISO 9001:2015 Certified manufacturer of premium high voltage electrical \
                          components and solar solutions. Serving state boards and private \
                          contractors since 2004."
                .into(),
            url: "https://www.meghaenterprises.in".into(),
            site_name: "Megha Enterprises".into(),
            locale: "en_IN".into(),
            og_type: "website".into(),
            images: vec![OgImage {
                url: SITE_LOGO.into(),
                width: Some(800),
                height: Some(600),
                alt: Some("Megha Enterprises Logo".into()),
            }],
        }
    }
}

/// Twitter card kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TwitterCard {
    Summary,
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl TwitterCard {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TwitterConfig {
    pub card: TwitterCard,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

impl Default for TwitterConfig {
    fn default() -> Self {
        Self {
            card: TwitterCard::SummaryLargeImage,
            title: "Megha Enterprises | Electrical & Solar Solutions".into(),
            description: "Reliable HT/LT line components, Solar Power Plants, and precision \
                          engineering from Aurangabad, Maharashtra."
                .into(),
            images: vec![SITE_LOGO.into()],
        }
    }
}
