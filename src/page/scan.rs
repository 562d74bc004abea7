//! Content directory scanning.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use jwalk::WalkDir;
use rayon::prelude::*;

use super::{Page, PageError, SourceKind};
use crate::config::SiteConfig;
use crate::debug;

/// Files that are never content
const IGNORED_FILES: &[&str] = &[".DS_Store", "Thumbs.db"];

/// Collect all files from a directory recursively, sorted by path.
///
/// Dotfiles and dot directories are included unless `skip_hidden` is set.
pub fn collect_all_files(dir: &Path, skip_hidden: bool) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .skip_hidden(skip_hidden)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| {
            let name = e.file_name().to_str().unwrap_or_default();
            !IGNORED_FILES.contains(&name)
        })
        .map(|e| e.path())
        .collect();
    files.sort();
    files
}

/// Load every non-draft page under the content directory.
///
/// Pages come back sorted by permalink. Two sources rendering to the same
/// permalink (`about.md` and `about/index.md`) are an error.
pub fn collect_pages(config: &SiteConfig) -> Result<Vec<Page>, PageError> {
    let sources: Vec<PathBuf> = collect_all_files(&config.build.content, true)
        .into_iter()
        .filter(|p| SourceKind::from_path(p).is_some())
        .collect();

    let pages = sources
        .par_iter()
        .map(|source| Page::load(source, config))
        .collect::<Result<Vec<_>, _>>()?;

    let mut by_permalink: BTreeMap<String, Page> = BTreeMap::new();
    for page in pages {
        if page.meta.draft {
            debug!("page"; "skipping draft {}", page.route.source.display());
            continue;
        }
        if let Some(existing) = by_permalink.get(&page.route.permalink) {
            return Err(PageError::Conflict {
                permalink: page.route.permalink.clone(),
                first: existing.route.source.clone(),
                second: page.route.source.clone(),
            });
        }
        by_permalink.insert(page.route.permalink.clone(), page);
    }

    Ok(by_permalink.into_values().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site() -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.content = dir.path().join("content");
        config.build.output = dir.path().join("public");
        fs::create_dir_all(config.build.content.join("products")).unwrap();
        (dir, config)
    }

    #[test]
    fn test_collect_pages_sorted_without_drafts() {
        let (_dir, config) = site();
        let content = &config.build.content;
        fs::write(content.join("index.html"), "<h1>Home</h1>").unwrap();
        fs::write(content.join("contact.md"), "Call us.").unwrap();
        fs::write(content.join("products/index.md"), "# Products").unwrap();
        fs::write(content.join("wip.md"), "+++\ndraft = true\n+++\n").unwrap();
        fs::write(content.join("logo.png"), [0u8; 4]).unwrap();

        let pages = collect_pages(&config).unwrap();
        let permalinks: Vec<&str> = pages.iter().map(|p| p.route.permalink.as_str()).collect();
        assert_eq!(permalinks, ["/", "/contact/", "/products/"]);
    }

    #[test]
    fn test_conflicting_permalinks() {
        let (_dir, config) = site();
        let content = &config.build.content;
        fs::write(content.join("products.md"), "a").unwrap();
        fs::write(content.join("products/index.html"), "b").unwrap();

        let err = collect_pages(&config).unwrap_err();
        assert!(matches!(err, PageError::Conflict { ref permalink, .. } if permalink == "/products/"));
    }

    #[test]
    fn test_hidden_files() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join(".well-known")).unwrap();
        fs::write(dir.path().join(".well-known/security.txt"), "Contact: x").unwrap();
        fs::write(dir.path().join(".htaccess"), "").unwrap();
        fs::write(dir.path().join("megha_logo.png"), [0u8; 4]).unwrap();

        assert_eq!(collect_all_files(dir.path(), true).len(), 1);

        let all = collect_all_files(dir.path(), false);
        assert_eq!(all.len(), 3);
        assert!(all.contains(&dir.path().join(".well-known/security.txt")));
    }

    #[test]
    fn test_missing_content_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = SiteConfig::default();
        config.build.content = dir.path().join("nope");
        assert!(collect_pages(&config).unwrap().is_empty());
    }
}
