//! `megha meta`: print the generated head metadata of one page.
//!
//! JSON by default, one object per tag in document order:
//!
//! ```json
//! [
//!   { "tag": "title", "text": "Megha Enterprises | ..." },
//!   { "tag": "meta", "attr": "name", "key": "description", "content": "..." }
//! ]
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::cli::MetaArgs;
use crate::cli::common::load_home;
use crate::config::SiteConfig;
use crate::page::Page;
use crate::seo::head_tags;
use crate::shell::Shell;

pub fn print_meta(args: &MetaArgs, config: &SiteConfig) -> Result<()> {
    let page = match &args.path {
        Some(path) => {
            let source = resolve_source(path)?;
            Page::load(&source, config)?
        }
        None => load_home(config)?,
    };
    println!("{}", render_meta(&page, config, args.html)?);
    Ok(())
}

/// Head metadata of `page` as JSON, or as the full `<head>` with `html`.
pub fn render_meta(page: &Page, config: &SiteConfig, html: bool) -> Result<String> {
    if html {
        return Ok(Shell::new(config).head(&page.seo()).to_html(true));
    }
    let tags = head_tags(&config.site, &page.seo());
    serde_json::to_string_pretty(&tags).context("Failed to serialize head tags")
}

fn resolve_source(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        return Ok(path.to_path_buf());
    }
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    Ok(cwd.join(path))
}
