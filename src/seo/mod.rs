//! Search-engine and link-preview metadata.
//!
//! Turns the site-wide [`PageMetadata`] plus a page's own overrides into
//! the ordered list of `<head>` tags for that page.
//!
//! [`PageMetadata`]: crate::config::PageMetadata

mod head;
mod og;

pub use head::{HeadTag, MetaAttr, head_tags};

use url::Url;

/// Per-page values layered over the site-wide metadata.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageSeo<'a> {
    /// Page title; `None` renders the default (home) title.
    pub title: Option<&'a str>,
    pub description: Option<&'a str>,
    /// Site-relative image replacing the default preview image.
    pub image: Option<&'a str>,
    /// URL path of the page, `/` for the home page.
    pub permalink: &'a str,
}

impl<'a> PageSeo<'a> {
    /// The home page: default title, default description and image.
    pub const fn home() -> Self {
        Self {
            title: None,
            description: None,
            image: None,
            permalink: "/",
        }
    }

    pub fn is_home(&self) -> bool {
        self.permalink == "/"
    }

    /// Page title with blank values treated as absent.
    fn title(&self) -> Option<&'a str> {
        non_blank(self.title)
    }

    fn description(&self) -> Option<&'a str> {
        non_blank(self.description)
    }

    fn image(&self) -> Option<&'a str> {
        non_blank(self.image)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Resolve `path` against the metadata base URL.
///
/// Absolute URLs pass through; without a usable base the path is kept.
pub fn absolute_url(base: Option<&Url>, path: &str) -> String {
    match base.map(|base| base.join(path)) {
        Some(Ok(url)) => url.to_string(),
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url() {
        let base = Url::parse("https://www.meghaenterprises.in").unwrap();
        assert_eq!(
            absolute_url(Some(&base), "/megha_logo.png"),
            "https://www.meghaenterprises.in/megha_logo.png"
        );
        assert_eq!(
            absolute_url(Some(&base), "https://cdn.example.com/a.png"),
            "https://cdn.example.com/a.png"
        );
        assert_eq!(absolute_url(None, "/megha_logo.png"), "/megha_logo.png");
    }

    #[test]
    fn test_blank_overrides_are_absent() {
        let page = PageSeo {
            title: Some("  "),
            description: Some(""),
            image: None,
            permalink: "/about/",
        };
        assert_eq!(page.title(), None);
        assert_eq!(page.description(), None);
        assert!(!page.is_home());
        assert!(PageSeo::home().is_home());
    }
}
