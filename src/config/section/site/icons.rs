//! `[site.icons]`: favicon, shortcut and apple touch icon.

use serde::{Deserialize, Serialize};

/// The logo shipped with the site, used wherever no other image is given.
pub const SITE_LOGO: &str = "/megha_logo.png";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconsConfig {
    pub icon: String,
    pub shortcut: String,
    pub apple: String,
}

impl Default for IconsConfig {
    fn default() -> Self {
        Self {
            icon: SITE_LOGO.into(),
            shortcut: SITE_LOGO.into(),
            apple: SITE_LOGO.into(),
        }
    }
}

impl IconsConfig {
    /// `(rel, href)` pairs in head order.
    pub fn links(&self) -> [(&'static str, &str); 3] {
        [
            ("shortcut icon", self.shortcut.as_str()),
            ("icon", self.icon.as_str()),
            ("apple-touch-icon", self.apple.as_str()),
        ]
    }
}
