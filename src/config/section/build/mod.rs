//! `[build]` section: where pages come from and where the site is written.
//!
//! ```toml
//! [build]
//! content = "content"
//! output = "public"
//! assets = "assets"
//! minify = true
//!
//! [build.sitemap]
//! enable = true
//! ```

mod sitemap;

pub use sitemap::SitemapConfig;

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildConfig {
    /// Page sources (`.md`, `.html`).
    pub content: PathBuf,
    /// Rendered site.
    pub output: PathBuf,
    /// Static files copied verbatim to the output root (logo, images).
    pub assets: PathBuf,
    /// Render documents without indentation.
    pub minify: bool,
    /// Remove the output directory before building (CLI only).
    #[serde(skip)]
    pub clean: bool,
    pub sitemap: SitemapConfig,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            content: "content".into(),
            output: "public".into(),
            assets: "assets".into(),
            minify: false,
            clean: false,
            sitemap: SitemapConfig::default(),
        }
    }
}

impl BuildConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        self.sitemap.validate(diag);
    }
}
