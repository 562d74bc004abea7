//! `[site]` section: the page metadata record.
//!
//! Built once when the config loads and read-only afterwards. Head tags
//! for every page are generated from it by `seo::head`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://www.meghaenterprises.in"
//! keywords = ["Solar EPC", "HT Line Erection"]
//!
//! [site.title]
//! default = "Megha Enterprises | Premier Electrical, Solar & Fabrication Solutions"
//! template = "%s | Megha Enterprises"
//!
//! [site.open_graph]
//! locale = "en_IN"
//!
//! [[site.open_graph.images]]
//! url = "/megha_logo.png"
//! width = 800
//! height = 600
//! ```

mod icons;
mod info;
mod robots;
mod social;

pub use icons::{IconsConfig, SITE_LOGO};
pub use info::{Author, FormatDetectionConfig, TITLE_PLACEHOLDER, TitleConfig};
pub use robots::{RobotsConfig, VerificationConfig};
pub use social::{OgImage, OpenGraphConfig, TwitterConfig};

use crate::config::util::{check_http_url, check_site_path};
use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

/// How the site presents itself to search engines and social platforms.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageMetadata {
    pub title: TitleConfig,
    pub description: String,
    /// Ordered keyword list, joined with `,` in the keywords meta tag.
    pub keywords: Vec<String>,
    pub authors: Vec<Author>,
    pub creator: String,
    pub publisher: String,
    /// Base URL relative asset and page URLs resolve against.
    pub url: String,
    pub format_detection: FormatDetectionConfig,
    pub icons: IconsConfig,
    pub open_graph: OpenGraphConfig,
    pub twitter: TwitterConfig,
    pub robots: RobotsConfig,
    pub verification: VerificationConfig,
}

impl Default for PageMetadata {
    fn default() -> Self {
        Self {
            title: TitleConfig::default(),
            description: "Leading manufacturer and service provider for High Voltage Electrical \
                          Components (11kV-132kV), Solar Plant Installations, and Industrial \
                          Fabrication in Aurangabad. ISO 9001:2015 Certified experts in HT/LT \
                          lines and metal structural engineering."
                .into(),
            keywords: [
                "Electricals",
                "Fabrication",
                "Solar Plant Installation",
                "High Voltage Isolators",
                "Air Break Switches",
                "Transmission Line Materials",
                "Aurangabad Engineering",
                "Solar EPC",
                "Structural Fabrication",
                "Megha Enterprises",
                "Sheet Metal Work",
                "HT Line Erection",
                "Electrical Contractors Maharashtra",
                "Solar Energy Solutions",
                "Industrial Fabrication Aurangabad",
            ]
            .map(String::from)
            .to_vec(),
            authors: vec![Author {
                name: "Megha Enterprises".into(),
                url: None,
            }],
            creator: "Megha Enterprises".into(),
            publisher: "Megha Enterprises".into(),
            url: "https://www.meghaenterprises.in".into(),
            format_detection: FormatDetectionConfig::default(),
            icons: IconsConfig::default(),
            open_graph: OpenGraphConfig::default(),
            twitter: TwitterConfig::default(),
            robots: RobotsConfig::default(),
            verification: VerificationConfig::default(),
        }
    }
}

impl PageMetadata {
    /// Every image path the metadata references, with the field it came from.
    pub fn image_refs(&self) -> Vec<(FieldPath, &str)> {
        let mut refs = vec![
            (FieldPath::new("site.icons.icon"), self.icons.icon.as_str()),
            (FieldPath::new("site.icons.shortcut"), self.icons.shortcut.as_str()),
            (FieldPath::new("site.icons.apple"), self.icons.apple.as_str()),
        ];
        refs.extend(
            self.open_graph
                .images
                .iter()
                .map(|img| (FieldPath::new("site.open_graph.images"), img.url.as_str())),
        );
        refs.extend(
            self.twitter
                .images
                .iter()
                .map(|img| (FieldPath::new("site.twitter.images"), img.as_str())),
        );
        refs
    }

    /// Validate site metadata.
    ///
    /// # Checks
    /// - default title is non-empty
    /// - title template contains `%s`
    /// - `url` and `open_graph.url` are http(s) URLs with a host
    /// - every image reference is a site-relative path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.title.default.trim().is_empty() {
            diag.error(
                FieldPath::new("site.title.default"),
                "default title must not be empty",
            );
        }

        if !self.title.template.contains(TITLE_PLACEHOLDER) {
            diag.error_with_hint(
                FieldPath::new("site.title.template"),
                format!("template `{}` has no `%s` placeholder", self.title.template),
                "use e.g. \"%s | Megha Enterprises\"",
            );
        }

        check_http_url(FieldPath::new("site.url"), &self.url, diag);
        if !self.open_graph.url.is_empty() {
            check_http_url(FieldPath::new("site.open_graph.url"), &self.open_graph.url, diag);
        }

        for (field, path) in self.image_refs() {
            check_site_path(field, path, diag);
        }

        if self.keywords.iter().any(|k| k.trim().is_empty()) {
            diag.warn(FieldPath::new("site.keywords"), "contains an empty keyword");
        }
        if self.open_graph.images.is_empty() {
            diag.warn(
                FieldPath::new("site.open_graph.images"),
                "no fallback image, link previews will be bare",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let mut diag = ConfigDiagnostics::new();
        PageMetadata::default().validate(&mut diag);
        assert!(!diag.has_errors());
        assert_eq!(diag.warning_count(), 0);
    }

    #[test]
    fn test_keyword_order_is_kept() {
        let meta = PageMetadata::default();
        assert_eq!(meta.keywords.len(), 15);
        assert_eq!(meta.keywords.first().unwrap(), "Electricals");
        assert_eq!(
            meta.keywords.last().unwrap(),
            "Industrial Fabrication Aurangabad"
        );
    }

    #[test]
    fn test_all_default_images_are_the_logo() {
        let meta = PageMetadata::default();
        let refs = meta.image_refs();
        assert_eq!(refs.len(), 5);
        assert!(refs.iter().all(|(_, path)| *path == SITE_LOGO));
    }

    #[test]
    fn test_relative_image_is_rejected() {
        let mut meta = PageMetadata::default();
        meta.twitter.images = vec!["megha_logo.png".into()];
        let mut diag = ConfigDiagnostics::new();
        meta.validate(&mut diag);
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field.as_str(), "site.twitter.images");
    }
}
