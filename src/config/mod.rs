//! Site configuration management for `megha.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── build/     # [build] and [build.sitemap]
//! │   ├── shell/     # [shell], fonts and analytics
//! │   └── site/      # [site] page metadata (title, og, twitter, robots)
//! ├── types/         # ConfigError, ConfigDiagnostics, FieldPath
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! The config file is optional. Every section defaults to the values the
//! production site ships with, so a missing `megha.toml` renders the real
//! site and a present one only needs to list what it overrides.

pub mod section;
pub mod types;
mod util;

pub use section::{BuildConfig, FontConfig, OgImage, PageMetadata, ShellConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};
pub use util::is_site_path;

use crate::{
    cli::{Cli, Commands},
    debug, log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use util::find_config_file;

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing megha.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file, empty when running on defaults
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory
    #[serde(skip)]
    pub root: PathBuf,

    /// Page metadata (title, description, og, twitter, robots, icons)
    #[serde(default)]
    pub site: PageMetadata,

    /// Document shell (lang, classes, fonts, analytics)
    #[serde(default)]
    pub shell: ShellConfig,

    /// Build settings
    #[serde(default)]
    pub build: BuildConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. The project root is the
    /// config file's parent directory, or cwd when no file is found.
    pub fn load(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        let mut config = match find_config_file(&cli.config) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                let mut config = Self::from_path(&path)?;
                config.root = path.parent().map(Path::to_path_buf).unwrap_or(cwd);
                config.config_path = path;
                config
            }
            None => {
                debug!("config"; "{} not found, using built-in defaults", cli.config.display());
                Self {
                    root: cwd,
                    ..Self::default()
                }
            }
        };

        config.apply_cli(cli);
        config.normalize_paths();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {field}");
        }
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply command-specific CLI overrides.
    fn apply_cli(&mut self, cli: &Cli) {
        Self::update_option(&mut self.build.content, cli.content.as_ref());
        Self::update_option(&mut self.build.output, cli.output.as_ref());

        if let Commands::Build { build_args } = &cli.command {
            Self::update_option(&mut self.build.minify, build_args.minify.as_ref());
            self.build.clean = build_args.clean;
            Self::update_option(&mut self.build.sitemap.enable, build_args.sitemap.as_ref());
            if let Some(ref url) = build_args.site_url {
                self.override_site_url(url);
            }
        }
    }

    /// Point the site at another base URL, e.g. a staging deploy.
    ///
    /// The home page `og:url` follows when it was the old base URL.
    fn override_site_url(&mut self, url: &str) {
        let og_url = &mut self.site.open_graph.url;
        if og_url.trim_end_matches('/') == self.site.url.trim_end_matches('/') {
            *og_url = url.to_string();
        }
        self.site.url = url.to_string();
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    /// Resolve build directories against the project root.
    fn normalize_paths(&mut self) {
        let root = self.root.clone();
        self.build.content = root.join(&self.build.content);
        self.build.output = root.join(&self.build.output);
        self.build.assets = root.join(&self.build.assets);
        // sitemap.path stays relative, resolved against output at write time
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate every section, returning all collected errors at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();
        self.collect_diagnostics(&mut diag);
        diag.print_warnings();
        if diag.has_errors() {
            return Err(ConfigError::Diagnostics(diag).into());
        }
        debug!("config"; "valid, {} warnings", diag.warning_count());
        Ok(())
    }

    /// Run section validators into `diag`.
    pub fn collect_diagnostics(&self, diag: &mut ConfigDiagnostics) {
        self.site.validate(diag);
        self.shell.validate(diag);
        self.build.validate(diag);
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config, panicking on unknown fields to catch typos in tests.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_site_defaults() {
        let config = test_parse_config("");
        assert_eq!(
            config.site.title.default,
            "Megha Enterprises | Premier Electrical, Solar & Fabrication Solutions"
        );
        assert_eq!(config.site.url, "https://www.meghaenterprises.in");
        assert_eq!(config.shell.lang, "en");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_override_keeps_other_defaults() {
        let config = test_parse_config(
            r#"
            [site.title]
            template = "%s - Megha"

            [shell.analytics]
            measurement_id = "G-TEST123"
            "#,
        );
        assert_eq!(config.site.title.template, "%s - Megha");
        assert_eq!(
            config.site.title.default,
            "Megha Enterprises | Premier Electrical, Solar & Fabrication Solutions"
        );
        assert_eq!(config.shell.analytics.measurement_id, "G-TEST123");
        assert!(config.shell.analytics.enable);
    }

    #[test]
    fn test_unknown_fields_are_collected() {
        let (_, ignored) = SiteConfig::parse_with_ignored("[site]\ntitel = \"x\"\n").unwrap();
        assert_eq!(ignored, vec!["site.titel".to_string()]);
    }

    #[test]
    fn test_validate_collects_all_errors() {
        let config = test_parse_config(
            r#"
            [site]
            url = "ftp://example.com"

            [site.title]
            default = ""
            template = "Megha"
            "#,
        );
        let mut diag = ConfigDiagnostics::new();
        config.collect_diagnostics(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_normalize_paths_joins_root() {
        let mut config = SiteConfig {
            root: PathBuf::from("/site"),
            ..SiteConfig::default()
        };
        config.normalize_paths();
        assert_eq!(config.build.content, PathBuf::from("/site/content"));
        assert_eq!(config.build.output, PathBuf::from("/site/public"));
        assert_eq!(config.build.assets, PathBuf::from("/site/assets"));
    }

    #[test]
    fn test_site_url_override_moves_og_url() {
        use clap::Parser;

        let cli = Cli::parse_from(["megha", "build", "-U", "https://staging.example.com"]);
        let mut config = SiteConfig::default();
        config.apply_cli(&cli);
        assert_eq!(config.site.url, "https://staging.example.com");
        assert_eq!(config.site.open_graph.url, "https://staging.example.com");

        let mut config = test_parse_config(
            r#"
            [site.open_graph]
            url = "https://share.example.com"
            "#,
        );
        config.apply_cli(&cli);
        assert_eq!(config.site.open_graph.url, "https://share.example.com");
    }

    #[test]
    fn test_parse_rejects_bad_toml() {
        assert!(SiteConfig::parse_with_ignored("[site\n").is_err());
    }
}
