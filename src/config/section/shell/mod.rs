//! `[shell]` section: the document shell every page is wrapped in.
//!
//! # Example
//!
//! ```toml
//! [shell]
//! lang = "en"
//!
//! [shell.analytics]
//! measurement_id = "G-8ESDRSPCJF"
//!
//! [[shell.fonts]]
//! family = "Roboto"
//! variable = "--font-roboto"
//! weights = [400, 500, 700]
//! ```

mod analytics;
mod fonts;

pub use analytics::AnalyticsConfig;
pub use fonts::FontConfig;

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// `lang` attribute of `<html>`.
    pub lang: String,
    pub html_class: String,
    /// Base classes of `<body>`; font variable classes are prepended.
    pub body_class: String,
    pub main_class: String,
    pub fonts: Vec<FontConfig>,
    pub analytics: AnalyticsConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            lang: "en".into(),
            html_class: "scroll-smooth".into(),
            body_class: "font-sans min-h-screen flex flex-col relative transition-colors \
                         duration-300 bg-white text-slate-900 overflow-x-hidden"
                .into(),
            main_class: "flex-1 overflow-x-hidden".into(),
            fonts: fonts::default_fonts(),
            analytics: AnalyticsConfig::default(),
        }
    }
}

impl ShellConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.lang.trim().is_empty() {
            diag.error(FieldPath::new("shell.lang"), "language must not be empty");
        }
        for font in &self.fonts {
            font.validate(diag);
        }
        self.analytics.validate(diag);
    }
}
