//! Site building orchestration.
//!
//! Build pipeline phases:
//! - **Init** - Clean (with `--clean`) and create the output directory
//! - **Collect** - Load content pages, adding an empty home page if missing
//! - **Render** - Parallel shell rendering of every page
//! - **Post-process** - Copy assets, write the sitemap
//! - **Finalize** - Missing asset warnings, logging

use crate::{
    cli::common::{copy_dir, load_pages, missing_assets, plural_count, shadowed_pages},
    config::SiteConfig,
    debug,
    generator::sitemap::build_sitemap,
    log,
    page::Page,
    shell::Shell,
};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::{fs, path::PathBuf};

/// Build the entire site, returning the rendered pages.
pub fn build_site(config: &SiteConfig) -> Result<Vec<Page>> {
    init_build(config)?;

    let pages = load_pages(config)?;
    render_pages(config, &pages)?;

    let assets = copy_assets(config)?;
    for page in shadowed_pages(&assets, &pages) {
        log!(
            "warning";
            "asset {} overwrites the page rendered from {}",
            page.route.output_file.display(),
            page.route.source.display()
        );
    }
    build_sitemap(config, &pages)?;

    for missing in missing_assets(config, &pages) {
        log!("warning"; "{} references missing asset {}", missing.referrer, missing.url);
    }

    log!(
        "build";
        "{} and {} written to {}",
        plural_count(pages.len(), "page"),
        plural_count(assets.len(), "asset"),
        config.build.output.display()
    );
    Ok(pages)
}

fn init_build(config: &SiteConfig) -> Result<()> {
    let output = &config.build.output;
    if config.build.clean && output.exists() {
        fs::remove_dir_all(output)
            .with_context(|| format!("Failed to clean output directory {}", output.display()))?;
        debug!("build"; "cleaned {}", output.display());
    }
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))
}

fn render_pages(config: &SiteConfig, pages: &[Page]) -> Result<()> {
    let shell = Shell::new(config);
    pages.par_iter().try_for_each(|page| write_page(&shell, page))
}

fn write_page(shell: &Shell<'_>, page: &Page) -> Result<()> {
    let html = shell.render(&page.seo(), &page.body);
    let file = &page.route.output_file;
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file, html).with_context(|| format!("Failed to write {}", file.display()))?;
    debug!("build"; "{} -> {}", page.route.source.display(), page.route.permalink);
    Ok(())
}

fn copy_assets(config: &SiteConfig) -> Result<Vec<PathBuf>> {
    let assets = &config.build.assets;
    if !assets.is_dir() {
        debug!("build"; "no assets directory at {}", assets.display());
        return Ok(Vec::new());
    }
    copy_dir(assets, &config.build.output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn site(root: &Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config.build.assets = root.join("assets");
        fs::create_dir_all(&config.build.content).unwrap();
        config
    }

    #[test]
    fn test_build_site() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());
        fs::write(
            config.build.content.join("index.md"),
            "# Welcome\n\nPowering Maharashtra.",
        )
        .unwrap();
        fs::write(
            config.build.content.join("contact.md"),
            "+++\ntitle = \"Contact\"\n+++\nCall us.",
        )
        .unwrap();
        fs::create_dir_all(&config.build.assets).unwrap();
        fs::write(config.build.assets.join("megha_logo.png"), [0u8; 4]).unwrap();

        let pages = build_site(&config).unwrap();
        assert_eq!(pages.len(), 2);

        let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(home.starts_with("<!DOCTYPE html>"));
        assert!(home.contains("<h1>Welcome</h1>"));

        let contact = fs::read_to_string(dir.path().join("public/contact/index.html")).unwrap();
        assert!(contact.contains("<title>Contact | Megha Enterprises</title>"));

        assert!(dir.path().join("public/megha_logo.png").is_file());
        let sitemap = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://www.meghaenterprises.in/contact/</loc>"));
    }

    #[test]
    fn test_empty_content_renders_home() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());

        let pages = build_site(&config).unwrap();
        assert_eq!(pages.len(), 1);
        let home = fs::read_to_string(dir.path().join("public/index.html")).unwrap();
        assert!(home.contains("<main class=\"flex-1 overflow-x-hidden\"></main>"));
    }

    #[test]
    fn test_clean_removes_stale_output() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = site(dir.path());
        fs::create_dir_all(&config.build.output).unwrap();
        let stale = config.build.output.join("old.html");
        fs::write(&stale, "old").unwrap();

        build_site(&config).unwrap();
        assert!(stale.exists());

        config.build.clean = true;
        build_site(&config).unwrap();
        assert!(!stale.exists());
    }
}
