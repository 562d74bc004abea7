//! Pages: content sources, their metadata and routes.

mod meta;
mod route;
mod scan;

pub use meta::{PageMeta, split_front_matter};
pub use route::PageRoute;
pub use scan::{collect_all_files, collect_pages};

use std::path::{Path, PathBuf};

use pulldown_cmark::{Options, Parser, html};
use thiserror::Error;

use crate::config::{SiteConfig, is_site_path};
use crate::seo::PageSeo;

/// Page loading errors
#[derive(Debug, Error)]
pub enum PageError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid front matter in `{0}`")]
    FrontMatter(PathBuf, #[source] toml::de::Error),

    #[error("`{0}` is not inside the content directory")]
    OutsideContent(PathBuf),

    #[error("image `{image}` in `{path}` must be a site-relative path like /images/plant.jpg")]
    Image { path: PathBuf, image: String },

    #[error("`{first}` and `{second}` both render to {permalink}")]
    Conflict {
        permalink: String,
        first: PathBuf,
        second: PathBuf,
    },
}

/// Content source format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Markdown,
    Html,
}

impl SourceKind {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "md" | "markdown" => Some(Self::Markdown),
            "html" | "htm" => Some(Self::Html),
            _ => None,
        }
    }
}

/// A loaded page, body already rendered to an HTML fragment.
#[derive(Debug, Clone)]
pub struct Page {
    pub route: PageRoute,
    pub meta: PageMeta,
    pub body: String,
}

impl Page {
    /// Read and render one content file.
    pub fn load(source: &Path, config: &SiteConfig) -> Result<Self, PageError> {
        let route = PageRoute::from_source(source, &config.build.content, &config.build.output)?;
        let kind = SourceKind::from_path(source)
            .ok_or_else(|| PageError::OutsideContent(source.to_path_buf()))?;
        let text = std::fs::read_to_string(source)
            .map_err(|err| PageError::Io(source.to_path_buf(), err))?;
        Self::from_source(route, kind, &text)
    }

    /// Build a page from its source text.
    pub fn from_source(route: PageRoute, kind: SourceKind, text: &str) -> Result<Self, PageError> {
        let (front, body) = split_front_matter(text);
        let meta = match front {
            Some(front) => PageMeta::parse(front)
                .map_err(|err| PageError::FrontMatter(route.source.clone(), err))?,
            None => PageMeta::default(),
        };

        if let Some(image) = &meta.image
            && !is_site_path(image)
        {
            return Err(PageError::Image {
                path: route.source.clone(),
                image: image.clone(),
            });
        }

        let body = match kind {
            SourceKind::Markdown => render_markdown(body),
            SourceKind::Html => body.to_string(),
        };

        Ok(Self { route, meta, body })
    }

    /// Metadata overrides for head generation.
    ///
    /// The home page always uses the default title.
    pub fn seo(&self) -> PageSeo<'_> {
        PageSeo {
            title: if self.route.is_home() {
                None
            } else {
                self.meta.title.as_deref()
            },
            description: self.meta.description.as_deref(),
            image: self.meta.image.as_deref(),
            permalink: &self.route.permalink,
        }
    }
}

/// Render markdown to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let parser = Parser::new_ext(source, options);
    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(source: &str) -> PageRoute {
        PageRoute::from_source(Path::new(source), Path::new("/c"), Path::new("/o")).unwrap()
    }

    #[test]
    fn test_source_kind() {
        assert_eq!(
            SourceKind::from_path(Path::new("a.md")),
            Some(SourceKind::Markdown)
        );
        assert_eq!(
            SourceKind::from_path(Path::new("a.htm")),
            Some(SourceKind::Html)
        );
        assert_eq!(SourceKind::from_path(Path::new("a.png")), None);
        assert_eq!(SourceKind::from_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_markdown_page() {
        let page = Page::from_source(
            route("/c/solar.md"),
            SourceKind::Markdown,
            "+++\ntitle = \"Solar\"\n+++\n# Solar EPC\n\n| kW | Sites |\n|---|---|\n| 500 | 12 |\n",
        )
        .unwrap();
        assert!(page.body.starts_with("<h1>Solar EPC</h1>"));
        assert!(page.body.contains("<table>"));
        assert_eq!(page.seo().title, Some("Solar"));
        assert_eq!(page.seo().permalink, "/solar/");
    }

    #[test]
    fn test_html_page_is_verbatim() {
        let page =
            Page::from_source(route("/c/about.html"), SourceKind::Html, "<section>Hi</section>")
                .unwrap();
        assert_eq!(page.body, "<section>Hi</section>");
        assert_eq!(page.meta, PageMeta::default());
    }

    #[test]
    fn test_home_ignores_page_title() {
        let page = Page::from_source(
            route("/c/index.md"),
            SourceKind::Markdown,
            "+++\ntitle = \"Home\"\n+++\n",
        )
        .unwrap();
        assert_eq!(page.seo().title, None);
        assert_eq!(page.body, "");
    }

    #[test]
    fn test_relative_image_rejected() {
        let err = Page::from_source(
            route("/c/a.md"),
            SourceKind::Markdown,
            "+++\nimage = \"plant.jpg\"\n+++\n",
        )
        .unwrap_err();
        assert!(matches!(err, PageError::Image { .. }));
    }

    #[test]
    fn test_bad_front_matter() {
        let err = Page::from_source(route("/c/a.md"), SourceKind::Markdown, "+++\ntitle =\n+++\n")
            .unwrap_err();
        assert!(err.to_string().contains("invalid front matter"));
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("public");
        std::fs::create_dir_all(&config.build.content).unwrap();
        let source = config.build.content.join("contact.md");
        std::fs::write(&source, "---\ntitle: Contact\n---\nCall us.").unwrap();

        let page = Page::load(&source, &config).unwrap();
        assert_eq!(page.meta.title.as_deref(), Some("Contact"));
        assert_eq!(
            page.route.output_file,
            dir.path().join("public/contact/index.html")
        );
        assert_eq!(page.body, "<p>Call us.</p>\n");
    }
}
