//! `[build.sitemap]`: sitemap.xml generation.

use crate::config::{ConfigDiagnostics, FieldPath};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SitemapConfig {
    /// Enable sitemap generation.
    pub enable: bool,
    /// Output path for sitemap file, relative to the output directory.
    pub path: PathBuf,
}

impl Default for SitemapConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "sitemap.xml".into(),
        }
    }
}

impl SitemapConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.enable && (self.path.is_absolute() || self.path.as_os_str().is_empty()) {
            diag.error_with_hint(
                FieldPath::new("build.sitemap.path"),
                format!("`{}` must be a relative file path", self.path.display()),
                "paths are resolved against the output directory, e.g. \"sitemap.xml\"",
            );
        }
    }
}
