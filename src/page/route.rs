//! Page route - source to output path mapping.

use std::path::{Component, Path, PathBuf};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::PageError;

/// Characters escaped in a permalink path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Source -> output path mapping for a page
///
/// ```text
/// content/index.md           -> /                -> public/index.html
/// content/about.md           -> /about/          -> public/about/index.html
/// content/products/index.md  -> /products/       -> public/products/index.html
/// content/products/ab.html   -> /products/ab/    -> public/products/ab/index.html
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRoute {
    /// Source file path (e.g., content/about.md)
    pub source: PathBuf,
    /// Whether the source is an `index.*` file
    pub is_index: bool,
    /// URL path, always starting and ending with `/`
    pub permalink: String,
    /// Output HTML file (e.g., public/about/index.html)
    pub output_file: PathBuf,
}

impl PageRoute {
    pub fn from_source(source: &Path, content: &Path, output: &Path) -> Result<Self, PageError> {
        let relative = source
            .strip_prefix(content)
            .map_err(|_| PageError::OutsideContent(source.to_path_buf()))?;

        let stem = relative
            .file_stem()
            .ok_or_else(|| PageError::OutsideContent(source.to_path_buf()))?;
        let is_index = stem == "index";

        let mut segments: Vec<String> = relative
            .parent()
            .into_iter()
            .flat_map(Path::components)
            .filter_map(|c| match c {
                Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
                _ => None,
            })
            .collect();
        if !is_index {
            segments.push(stem.to_string_lossy().into_owned());
        }

        let mut permalink = String::from("/");
        let mut output_file = output.to_path_buf();
        for segment in &segments {
            permalink.push_str(&utf8_percent_encode(segment, SEGMENT).to_string());
            permalink.push('/');
            output_file.push(segment);
        }
        output_file.push("index.html");

        Ok(Self {
            source: source.to_path_buf(),
            is_index,
            permalink,
            output_file,
        })
    }

    pub fn is_home(&self) -> bool {
        self.is_index && self.permalink == "/"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn route(source: &str) -> PageRoute {
        PageRoute::from_source(
            Path::new(source),
            Path::new("/site/content"),
            Path::new("/site/public"),
        )
        .unwrap()
    }

    #[test]
    fn test_home_route() {
        let r = route("/site/content/index.md");
        assert!(r.is_index);
        assert!(r.is_home());
        assert_eq!(r.permalink, "/");
        assert_eq!(r.output_file, PathBuf::from("/site/public/index.html"));
    }

    #[test]
    fn test_pretty_urls() {
        let r = route("/site/content/about.md");
        assert_eq!(r.permalink, "/about/");
        assert_eq!(r.output_file, PathBuf::from("/site/public/about/index.html"));

        let r = route("/site/content/products/ab-switches.html");
        assert_eq!(r.permalink, "/products/ab-switches/");

        let r = route("/site/content/products/index.html");
        assert!(r.is_index);
        assert!(!r.is_home());
        assert_eq!(r.permalink, "/products/");
    }

    #[test]
    fn test_segments_are_escaped() {
        let r = route("/site/content/solar plant.md");
        assert_eq!(r.permalink, "/solar%20plant/");
        assert_eq!(
            r.output_file,
            PathBuf::from("/site/public/solar plant/index.html")
        );
    }

    #[test]
    fn test_outside_content_is_rejected() {
        let err = PageRoute::from_source(
            Path::new("/elsewhere/about.md"),
            Path::new("/site/content"),
            Path::new("/site/public"),
        )
        .unwrap_err();
        assert!(matches!(err, PageError::OutsideContent(_)));
    }
}
