//! Common utilities shared across CLI commands.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::SiteConfig;
use crate::page::{Page, PageRoute, SourceKind, collect_pages};

/// `1 page`, `3 pages`
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, if count == 1 { "" } else { "s" })
}

/// An image reference with no file behind it in the assets directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingAsset {
    /// Config field or content file that references the asset.
    pub referrer: String,
    pub url: String,
}

/// Map a site-relative URL path to its file in the assets directory.
pub fn asset_file(config: &SiteConfig, url: &str) -> PathBuf {
    let relative = url.split(['?', '#']).next().unwrap_or_default();
    config.build.assets.join(relative.trim_start_matches('/'))
}

/// Every config and page image reference without a shipped asset.
pub fn missing_assets(config: &SiteConfig, pages: &[Page]) -> Vec<MissingAsset> {
    let config_refs = config
        .site
        .image_refs()
        .into_iter()
        .map(|(field, url)| (field.as_str().to_string(), url));
    let page_refs = pages.iter().filter_map(|page| {
        let image = page.meta.image.as_deref()?;
        Some((page.route.source.display().to_string(), image))
    });

    let mut missing: Vec<MissingAsset> = config_refs
        .chain(page_refs)
        .filter(|(_, url)| !asset_file(config, url).is_file())
        .map(|(referrer, url)| MissingAsset {
            referrer,
            url: url.to_string(),
        })
        .collect();
    missing.dedup();
    missing
}

/// Load content pages, adding an empty home page when there is none.
pub fn load_pages(config: &SiteConfig) -> Result<Vec<Page>> {
    let mut pages = collect_pages(config).context("failed to load pages")?;
    if !pages.iter().any(|p| p.route.is_home()) {
        crate::debug!("build"; "no index page in content, rendering an empty home page");
        pages.insert(0, home_page(config)?);
    }
    Ok(pages)
}

/// Home page source extensions, in lookup order.
const HOME_EXTENSIONS: [&str; 4] = ["md", "markdown", "html", "htm"];

/// The home page as `build` renders it: `content/index.*`, else empty.
pub fn load_home(config: &SiteConfig) -> Result<Page> {
    let content = &config.build.content;
    let source = HOME_EXTENSIONS
        .iter()
        .map(|ext| content.join("index").with_extension(ext))
        .find(|path| path.is_file());

    match source {
        Some(source) => {
            let page = Page::load(&source, config)?;
            if page.meta.draft {
                return home_page(config);
            }
            Ok(page)
        }
        None => home_page(config),
    }
}

/// The home page with no content.
pub fn home_page(config: &SiteConfig) -> Result<Page> {
    let source = config.build.content.join("index.html");
    let route = PageRoute::from_source(&source, &config.build.content, &config.build.output)?;
    Ok(Page::from_source(route, SourceKind::Html, "")?)
}

/// Copy `src` into `dest`, dotfiles included, returning the written paths.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<Vec<PathBuf>> {
    let files = crate::page::collect_all_files(src, false);
    let mut written = Vec::with_capacity(files.len());
    for file in &files {
        let relative = file.strip_prefix(src).unwrap_or(file);
        let target = dest.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::copy(file, &target)
            .with_context(|| format!("Failed to copy {}", file.display()))?;
        written.push(target);
    }
    Ok(written)
}

/// Pages whose rendered file is replaced by one of `assets`.
pub fn shadowed_pages<'a>(assets: &[PathBuf], pages: &'a [Page]) -> Vec<&'a Page> {
    let assets: HashSet<&Path> = assets.iter().map(PathBuf::as_path).collect();
    pages
        .iter()
        .filter(|page| assets.contains(page.route.output_file.as_path()))
        .collect()
}
