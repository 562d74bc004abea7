//! Sitemap generation.
//!
//! Generates a sitemap.xml file listing all pages for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://www.meghaenterprises.in/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::SiteConfig, log, page::Page};
use anyhow::{Context, Result};
use quick_xml::escape::escape;
use std::fs;
use url::Url;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &SiteConfig, pages: &[Page]) -> Result<()> {
    if config.build.sitemap.enable {
        let sitemap = Sitemap::build(config, pages);
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(config: &SiteConfig, pages: &[Page]) -> Self {
        let base = Url::parse(&config.site.url).ok();
        let urls = pages
            .iter()
            .map(|page| crate::seo::absolute_url(base.as_ref(), &page.route.permalink))
            .collect();
        Self { urls }
    }

    fn into_xml(self, pretty: bool) -> String {
        let (nl, indent) = if pretty { ("\n", "  ") } else { ("", "") };
        let mut xml = String::with_capacity(128 + self.urls.len() * 96);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">");
        xml.push_str(nl);

        for loc in &self.urls {
            xml.push_str(indent);
            xml.push_str("<url>");
            xml.push_str(nl);
            xml.push_str(indent);
            xml.push_str(indent);
            xml.push_str("<loc>");
            xml.push_str(&escape(loc.as_str()));
            xml.push_str("</loc>");
            xml.push_str(nl);
            xml.push_str(indent);
            xml.push_str("</url>");
            xml.push_str(nl);
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &SiteConfig) -> Result<()> {
        let sitemap_path = config.build.output.join(&config.build.sitemap.path);
        let xml = self.into_xml(!config.build.minify);

        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&sitemap_path, xml)
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{}", sitemap_path.file_name().unwrap_or_default().to_string_lossy());
        Ok(())
    }
}
