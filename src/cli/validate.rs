//! `megha validate`: check the site without writing anything.
//!
//! The config itself is validated when it is loaded; this adds checks that
//! need the filesystem:
//! - every content page loads (front matter, image paths, permalinks)
//! - every image and icon the metadata references exists under `assets`

use anyhow::{Result, bail};

use crate::cli::common::{MissingAsset, load_pages, missing_assets, plural_count};
use crate::config::SiteConfig;
use crate::log;

pub fn validate_site(config: &SiteConfig) -> Result<()> {
    let pages = load_pages(config)?;
    let missing = missing_assets(config, &pages);

    if !missing.is_empty() {
        report(&missing);
        bail!("validation failed: {}", plural_count(missing.len(), "missing asset"));
    }

    let source = if config.config_path.as_os_str().is_empty() {
        "built-in config".to_string()
    } else {
        config.config_path.display().to_string()
    };
    log!("validate"; "{} and {} ok", source, plural_count(pages.len(), "page"));
    Ok(())
}

fn report(missing: &[MissingAsset]) {
    for asset in missing {
        log!("error"; "{} references {}, not found in assets", asset.referrer, asset.url);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn site(root: &std::path::Path) -> SiteConfig {
        let mut config = SiteConfig::default();
        config.build.content = root.join("content");
        config.build.output = root.join("public");
        config.build.assets = root.join("assets");
        fs::create_dir_all(&config.build.content).unwrap();
        fs::create_dir_all(&config.build.assets).unwrap();
        config
    }

    #[test]
    fn test_missing_logo_fails() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());
        let err = validate_site(&config).unwrap_err();
        assert!(err.to_string().contains("missing asset"));
    }

    #[test]
    fn test_complete_site_passes() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());
        fs::write(config.build.assets.join("megha_logo.png"), [0u8; 4]).unwrap();
        fs::write(config.build.content.join("index.md"), "# Home").unwrap();
        validate_site(&config).unwrap();
        assert!(!config.build.output.exists());
    }

    #[test]
    fn test_page_image_checked() {
        let dir = tempfile::tempdir().unwrap();
        let config = site(dir.path());
        fs::write(config.build.assets.join("megha_logo.png"), [0u8; 4]).unwrap();
        fs::write(
            config.build.content.join("solar.md"),
            "+++\nimage = \"/images/solar.jpg\"\n+++\n",
        )
        .unwrap();
        assert!(validate_site(&config).is_err());

        fs::create_dir_all(config.build.assets.join("images")).unwrap();
        fs::write(config.build.assets.join("images/solar.jpg"), [0u8; 4]).unwrap();
        validate_site(&config).unwrap();
    }
}
