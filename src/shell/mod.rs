//! Root document shell.
//!
//! Wraps page content in the document every page shares:
//!
//! ```text
//! <html lang class>
//! ├── <head>   generated metadata, fonts, fallback favicon
//! └── <body>   font classes + base classes
//!     ├── analytics beacon
//!     ├── PagePreloader
//!     ├── ScrollProgress
//!     └── Providers
//!         └── SmoothScroll
//!             ├── Header
//!             ├── PremiumUX
//!             ├── <main>   page content
//!             ├── Footer
//!             ├── Chatbot
//!             └── Toaster
//! ```
//!
//! Rendering cannot fail: there is no branching on content, and empty
//! content renders an empty `<main>`.

pub mod fonts;
pub mod html;
pub mod region;

use crate::config::SiteConfig;
use crate::config::section::site::SITE_LOGO;
use crate::seo::{PageSeo, head_tags};
use fonts::Fonts;
use html::{Element, Node};
use region::{Region, analytics_beacon};

/// Renders complete documents for one site configuration.
pub struct Shell<'a> {
    config: &'a SiteConfig,
    fonts: Fonts,
}

impl<'a> Shell<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self {
            config,
            fonts: Fonts::new(&config.shell.fonts),
        }
    }

    /// Render the full document for `page` with `content` in `<main>`.
    pub fn render(&self, page: &PageSeo<'_>, content: &str) -> String {
        let pretty = !self.config.build.minify;
        let mut out = String::from("<!DOCTYPE html>");
        if pretty {
            out.push('\n');
        }
        out.push_str(&self.document(page, content).to_html(pretty));
        out.push('\n');
        out
    }

    /// The `<html>` element.
    pub fn document(&self, page: &PageSeo<'_>, content: &str) -> Element {
        let shell = &self.config.shell;
        let mut root = Element::new("html").attr("lang", shell.lang.as_str());
        if !shell.html_class.is_empty() {
            root.set_attr("class", shell.html_class.as_str());
        }
        root.child(self.head(page)).child(self.body(content))
    }

    /// The `<head>` element.
    pub fn head(&self, page: &PageSeo<'_>) -> Element {
        let mut head = Element::new("head")
            .child(Element::new("meta").attr("charset", "utf-8"))
            .child(
                Element::new("meta")
                    .attr("name", "viewport")
                    .attr("content", "width=device-width, initial-scale=1"),
            );

        for tag in head_tags(&self.config.site, page) {
            head.push(tag.to_element());
        }
        for elem in self.fonts.head_elements() {
            head.push(elem);
        }

        // Fallback favicon so mobile browser tabs use the logo
        head.child(Element::new("link").attr("rel", "icon").attr("href", SITE_LOGO))
    }

    /// The `<body>` element with every region mounted.
    pub fn body(&self, content: &str) -> Element {
        let shell = &self.config.shell;
        let class = [self.fonts.class_names().as_str(), shell.body_class.as_str()]
            .iter()
            .filter(|c| !c.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ");

        let mut body = Element::new("body");
        if !class.is_empty() {
            body.set_attr("class", class);
        }

        for region in Region::BODY {
            match region {
                Region::Analytics => {
                    if shell.analytics.enable {
                        for script in analytics_beacon(&shell.analytics.measurement_id) {
                            body.push(script);
                        }
                    }
                }
                Region::Providers => body.push(self.providers(content)),
                leaf => body.push(leaf.mount()),
            }
        }
        body
    }

    /// Providers › SmoothScroll › content regions.
    fn providers(&self, content: &str) -> Element {
        let mut smooth = Region::SmoothScroll.mount();
        for region in Region::CONTENT {
            match region {
                Region::Main => smooth.push(self.main(content)),
                leaf => smooth.push(leaf.mount()),
            }
        }
        Region::Providers.mount().child(smooth)
    }

    fn main(&self, content: &str) -> Element {
        let mut main = Element::new("main");
        if !self.config.shell.main_class.is_empty() {
            main.set_attr("class", self.config.shell.main_class.as_str());
        }
        if !content.is_empty() {
            main.push(Node::Raw(content.to_string()));
        }
        main
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(config: &SiteConfig, page: &PageSeo<'_>, content: &str) -> String {
        Shell::new(config).render(page, content)
    }

    fn position(html: &str, needle: &str) -> usize {
        html.find(needle)
            .unwrap_or_else(|| panic!("missing {needle}"))
    }

    #[test]
    fn test_single_html_root_with_lang() {
        let config = SiteConfig::default();
        let html = render(&config, &PageSeo::home(), "<p>hi</p>");
        assert!(html.starts_with("<!DOCTYPE html>\n<html lang=\"en\" class=\"scroll-smooth\">"));
        assert_eq!(html.matches("<html").count(), 1);
        assert_eq!(html.matches("</html>").count(), 1);
    }

    #[test]
    fn test_lang_follows_config() {
        let mut config = SiteConfig::default();
        config.shell.lang = "mr".into();
        let html = render(&config, &PageSeo::home(), "");
        assert!(html.contains("<html lang=\"mr\""));
    }

    #[test]
    fn test_region_order_is_fixed() {
        let config = SiteConfig::default();
        for content in ["", "<section>Products</section>", "<div data-component=\"X\"></div>"] {
            let html = render(&config, &PageSeo::home(), content);
            let order = [
                "data-component=\"GoogleAnalytics\"",
                "data-component=\"PagePreloader\"",
                "data-component=\"ScrollProgress\"",
                "data-component=\"Providers\"",
                "data-component=\"SmoothScroll\"",
                "data-component=\"Header\"",
                "data-component=\"PremiumUX\"",
                "<main",
                "data-component=\"Footer\"",
                "data-component=\"Chatbot\"",
                "data-component=\"Toaster\"",
            ];
            let positions: Vec<usize> = order.iter().map(|n| position(&html, n)).collect();
            assert!(
                positions.windows(2).all(|w| w[0] < w[1]),
                "regions out of order for {content:?}"
            );
        }
    }

    #[test]
    fn test_empty_content_keeps_structure() {
        let config = SiteConfig::default();
        let html = render(&config, &PageSeo::home(), "");
        assert!(html.contains("<main class=\"flex-1 overflow-x-hidden\"></main>"));
        assert!(html.contains("data-component=\"Footer\""));
        assert!(html.contains("data-component=\"Toaster\""));
    }

    #[test]
    fn test_content_is_inside_main() {
        let config = SiteConfig::default();
        let html = render(&config, &PageSeo::home(), "<h1>Solar EPC</h1>");
        assert!(html.contains("<main class=\"flex-1 overflow-x-hidden\"><h1>Solar EPC</h1></main>"));
    }

    #[test]
    fn test_fallback_favicon() {
        let mut config = SiteConfig::default();
        config.site.icons.icon = "/other.png".into();
        let head = Shell::new(&config).head(&PageSeo::home());
        let html = head.to_html(false);
        assert!(html.ends_with("<link rel=\"icon\" href=\"/megha_logo.png\"></head>"));
    }

    #[test]
    fn test_body_classes() {
        let config = SiteConfig::default();
        let body = Shell::new(&config).body("");
        let class = body.get_attr("class").unwrap();
        assert!(class.starts_with("font-open-sans font-roboto font-sans min-h-screen"));
        assert!(class.ends_with("overflow-x-hidden"));
    }

    #[test]
    fn test_analytics_disabled() {
        let mut config = SiteConfig::default();
        config.shell.analytics.enable = false;
        let html = render(&config, &PageSeo::home(), "");
        assert!(!html.contains("googletagmanager"));
        assert!(html.contains("data-component=\"PagePreloader\""));
    }

    #[test]
    fn test_titles() {
        let config = SiteConfig::default();
        let home = render(&config, &PageSeo::home(), "");
        assert!(home.contains(
            "<title>Megha Enterprises | Premier Electrical, Solar &amp; Fabrication Solutions</title>"
        ));

        let page = PageSeo {
            title: Some("Contact"),
            permalink: "/contact/",
            ..PageSeo::home()
        };
        let contact = render(&config, &page, "");
        assert!(contact.contains("<title>Contact | Megha Enterprises</title>"));
    }

    #[test]
    fn test_minified_has_no_newlines_inside() {
        let mut config = SiteConfig::default();
        config.build.minify = true;
        let html = render(&config, &PageSeo::home(), "");
        assert_eq!(html.trim_end().lines().count(), 1);
        assert!(html.starts_with("<!DOCTYPE html><html"));
    }
}
